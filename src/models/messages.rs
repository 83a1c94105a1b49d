use super::language::Language;
use crate::error::AppError;

const MAX_UPSTREAM_DETAIL_CHARS: usize = 200;

/// Localized, user-facing text for a failed relay cycle. Keyed by the same
/// tags `AppError::kind` produces; the generic upstream case is the only one
/// that interpolates.
pub fn user_message(language: Language, err: &AppError) -> String {
    if let Some(text) = lookup(language, err.kind()) {
        return text.to_string();
    }
    match err {
        AppError::UpstreamHttp { status, detail } => {
            let detail = truncate(detail.trim(), MAX_UPSTREAM_DETAIL_CHARS);
            match language {
                Language::Zh => format!("API错误 {status}：{detail}。请稍后重试。"),
                Language::En => format!("API error {status}: {detail}. Please try again later."),
            }
        }
        _ => lookup(language, "unknown").unwrap_or_default().to_string(),
    }
}

/// Body text for the 405 response.
pub fn method_not_allowed(language: Language) -> &'static str {
    match language {
        Language::Zh => "只支持POST请求",
        Language::En => "Only POST requests are supported",
    }
}

fn lookup(language: Language, kind: &'static str) -> Option<&'static str> {
    Some(match (language, kind) {
        (Language::Zh, "configuration") => {
            "AI服务配置错误：API密钥未设置。请检查部署环境变量。"
        }
        (Language::En, "configuration") => {
            "AI service configuration error: API key not set. Check deployment environment variables."
        }
        (Language::Zh, "upstream_auth") => {
            "API密钥无效或已过期。请检查DeepSeek账户和API密钥设置。"
        }
        (Language::En, "upstream_auth") => {
            "API key invalid or expired. Check DeepSeek account and API key settings."
        }
        (Language::Zh, "rate_limited") => "请求过于频繁，请稍后再试。",
        (Language::En, "rate_limited") => "Too many requests. Please try again later.",
        (Language::Zh, "upstream_unavailable") => "AI服务暂时不可用，请稍后重试。",
        (Language::En, "upstream_unavailable") => {
            "AI service temporarily unavailable. Please try again later."
        }
        (Language::Zh, "bad_payload") => "AI返回了无效的数据格式，请稍后重试。",
        (Language::En, "bad_payload") => {
            "The AI returned an unexpected response format. Please try again later."
        }
        (Language::Zh, "timeout") => {
            "⏱️ **请求超时**\n\n可能原因：\n• 问题较复杂，处理时间较长\n• 网络连接不稳定\n• AI服务暂时繁忙\n\n**建议：**\n1. 简化问题或分成小问题\n2. 稍后重试"
        }
        (Language::En, "timeout") => {
            "⏱️ **Request Timeout**\n\nPossible reasons:\n• Question is complex\n• Network connection issue\n• AI service busy\n\n**Suggestions:**\n1. Simplify your question\n2. Try again later"
        }
        (Language::Zh, "network") => {
            "🌐 **网络连接问题**\n\n无法连接到AI服务。请检查网络连接后重试。"
        }
        (Language::En, "network") => {
            "🌐 **Network Connection Issue**\n\nCannot connect to AI service. Please check your network connection."
        }
        (Language::Zh, "validation") => "消息内容不能为空",
        (Language::En, "validation") => "Message is required and cannot be empty",
        (Language::Zh, "unknown") => "❌ **服务暂时不可用**\n\n请稍后重试或联系管理员。",
        (Language::En, "unknown") => {
            "❌ **Service Temporarily Unavailable**\n\nPlease try again later or contact administrator."
        }
        _ => return None,
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
