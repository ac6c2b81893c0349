/// Prompt asking for the three labeled sections the parser looks for
pub fn definition_prompt(word: &str) -> String {
    format!(
        "영어 단어 \"{word}\"에 대해 한국어 학습자를 위해 설명해 주세요.\n\
         다음 형식을 지켜 주세요:\n\
         발음: [IPA 발음 기호]\n\
         뜻: 한국어 뜻\n\
         예문: 단어를 사용한 영어 예문 (한국어 번역)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_word_and_labels() {
        let prompt = definition_prompt("clock");
        assert!(prompt.contains("\"clock\""));
        for label in ["발음:", "뜻:", "예문:"] {
            assert!(prompt.contains(label), "missing {label}");
        }
    }
}
