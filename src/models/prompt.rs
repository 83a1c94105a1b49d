use super::language::Language;

const SYSTEM_PROMPT_ZH: &str = "你是SDD（规格驱动开发）教学助手。请用中文回答。

核心职责：
1. 解释SDD概念和方法
2. 解答规格文档、API设计、测试等问题
3. 对比SDD与Vibe Coding差异

要求：
- 用中文回答所有问题
- 清晰、准确、实用
- 使用代码示例
- 鼓励动手实践";

const SYSTEM_PROMPT_EN: &str = "You are an SDD (Spec-Driven Development) teaching assistant. Answer in English.

Core responsibilities:
1. Explain SDD concepts and methodologies
2. Answer questions about specs, API design, testing
3. Compare SDD vs Vibe Coding

Requirements:
- Answer all questions in English
- Clear, accurate, practical
- Use code examples
- Encourage hands-on practice";

/// Fixed persona prompt, one per language.
pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::Zh => SYSTEM_PROMPT_ZH,
        Language::En => SYSTEM_PROMPT_EN,
    }
}

/// Chinese replies need more tokens for the same content.
pub fn max_tokens(language: Language) -> u32 {
    match language {
        Language::Zh => 1200,
        Language::En => 1000,
    }
}
