//! 구분 문자 판별
//!
//! 글자 사이에 끼워 넣어 필터를 우회하는 데 쓰이는 문자들입니다.
//! 공백, 숫자, 문장 부호, 그리고 폭이 없는(zero-width) 서식 문자를 포함합니다.

/// 구분 문자인지 확인
pub fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_digit()
        || c.is_ascii_punctuation()
        || is_invisible(c)
        || is_wide_punctuation(c)
}

/// 폭이 없거나 보이지 않는 서식 문자 (한글 채움 문자 포함)
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{034F}'
            | '\u{061C}'
            | '\u{115F}'
            | '\u{1160}'
            | '\u{17B4}'
            | '\u{17B5}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{3164}'
            | '\u{FEFF}'
            | '\u{FFA0}'
    )
}

/// ASCII 밖의 흔한 문장 부호
fn is_wide_punctuation(c: char) -> bool {
    matches!(
        c,
        '·' | '・'
            | '。'
            | '、'
            | '「'
            | '」'
            | '『'
            | '』'
            | '【'
            | '】'
            | '《'
            | '》'
            | '〈'
            | '〉'
            | '…'
            | '‥'
            | '“'
            | '”'
            | '‘'
            | '’'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_separators() {
        for c in [' ', '\t', '\n', '0', '9', '.', ',', '!', '-', '_', '*', '~', '@'] {
            assert!(is_separator(c), "{:?}", c);
        }
    }

    #[test]
    fn test_unicode_separators() {
        assert!(is_separator('\u{3000}')); // 전각 공백
        assert!(is_separator('\u{200B}')); // zero width space
        assert!(is_separator('\u{200D}')); // zero width joiner
        assert!(is_separator('\u{FEFF}'));
        assert!(is_separator('\u{3164}')); // 한글 채움 문자
        assert!(is_separator('…'));
        assert!(is_separator('·'));
    }

    #[test]
    fn test_non_separators() {
        for c in ['a', 'Z', 'ㄱ', 'ㅏ', '가', 'ａ', '人'] {
            assert!(!is_separator(c), "{:?}", c);
        }
    }
}
