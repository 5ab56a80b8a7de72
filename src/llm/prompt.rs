//! Prompt builder for Korean order-transcript correction.
//!
//! [`PromptBuilder`] constructs the `(system_msg, user_msg)` pair sent to an
//! OpenAI-compatible chat endpoint.  The system message is assembled from the
//! live menu catalog (menu list + per-item few-shot examples) plus static
//! quantity-normalization rules, so a substitute catalog automatically gets a
//! matching correction prompt.

use crate::menu::MenuCatalog;

// ---------------------------------------------------------------------------
// Static instruction blocks
// ---------------------------------------------------------------------------

const SYSTEM_HEADER: &str = "\
당신은 한국어 음성 주문을 정확한 메뉴명과 수량으로 변환하는 전문가입니다.
다음 메뉴 중에서 가장 유사한 메뉴로 교정하고, 수량을 정확히 인식해주세요:";

const QUANTITY_RULES: &str = "\
[지시사항]
1. 수량은 반드시 보존하고, 누락되지 않도록 하세요.
2. 수량 표현은 다음과 같이 변환하세요:
   - \"하나\", \"한 개\", \"한 그릇\", \"일\" → \"1개\"
   - \"둘\", \"두 개\", \"두 그릇\", \"이\" → \"2개\"
   - \"셋\", \"세 개\", \"세 그릇\", \"서\", \"삼\" → \"3개\"
   - \"넷\", \"네 개\", \"네 그릇\", \"사\" → \"4개\"
   - \"다섯\", \"다섯 개\", \"오\" → \"5개\"
   - \"여섯\", \"육\" → \"6개\"
   - \"일곱\", \"칠\" → \"7개\"
   - \"여덟\", \"팔\" → \"8개\"
   - \"아홉\", \"구\" → \"9개\"
   - \"열\", \"십\" → \"10개\"
3. 메뉴 이름이 생략되었거나 줄여서 말해도 정확한 메뉴명으로 변환하세요.
4. 최종 출력 형식은 반드시 \"메뉴이름 수량\" 형식으로 하세요.
5. 수량이 없으면 \"1개\"로 기본값을 설정하세요.";

/// Example quantity phrasings cycled across catalog items, `(spoken, count)`.
const EXAMPLE_QUANTITIES: &[(&str, &str)] = &[("하나", "1개"), ("세 그릇", "3개"), ("둘", "2개")];

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds the correction prompt for a given menu catalog.
///
/// # Example
/// ```rust
/// use voice_order::llm::PromptBuilder;
/// use voice_order::menu::MenuCatalog;
///
/// let builder = PromptBuilder::new(&MenuCatalog::default());
/// let (system, user) = builder.build_chat("섞어 다섯 개요");
/// assert!(system.contains("[메뉴 목록]"));
/// assert!(user.contains("섞어 다섯 개요"));
/// ```
pub struct PromptBuilder {
    system_msg: String,
}

impl PromptBuilder {
    /// Assemble the system message from `catalog` once, at construction.
    pub fn new(catalog: &MenuCatalog) -> Self {
        let mut system_msg = String::with_capacity(2048);

        system_msg.push_str(SYSTEM_HEADER);
        system_msg.push_str("\n\n[메뉴 목록]\n");
        for (i, item) in catalog.items().iter().enumerate() {
            system_msg.push_str(&format!("{}. {}\n", i + 1, item.name));
        }

        system_msg.push_str("\n[주문 예시]\n");
        for (i, item) in catalog.items().iter().enumerate() {
            // The last alias is the most colloquial (shortest) surface form.
            let spoken = item.aliases.last().map_or(item.name.as_str(), |a| a.as_str());
            let (qty_spoken, qty_norm) = EXAMPLE_QUANTITIES[i % EXAMPLE_QUANTITIES.len()];
            system_msg.push_str(&format!(
                "- \"{} {}\" → \"{} {}\"\n",
                spoken, qty_spoken, item.name, qty_norm
            ));
        }

        system_msg.push('\n');
        system_msg.push_str(QUANTITY_RULES);

        Self { system_msg }
    }

    /// Build the `(system_msg, user_msg)` pair for one raw transcript.
    pub fn build_chat(&self, raw: &str) -> (String, String) {
        let user_msg = format!(
            "다음 음성 인식 결과를 분석하여 메뉴와 수량을 정확히 인식해주세요.\n\
             수량은 반드시 보존하고, 메뉴는 정확한 이름으로 변환해주세요.\n\
             입력: '{raw}'"
        );
        (self.system_msg.clone(), user_msg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
