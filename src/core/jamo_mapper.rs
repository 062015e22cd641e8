//! 자모 분류 및 두벌식 자판 영문 키 -> 한글 자모 매핑

use crate::core::unicode::{choseong_index, jongseong_index, jungseong_index};

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (초성 불가 복합 자음은 cho_index None, 종성 불가 쌍자음은 jong_index None)
    Consonant {
        cho_index: Option<u32>,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
}

/// 호환용 자모 문자를 자음/모음으로 분류
/// 자모가 아닌 문자는 None 반환
pub fn classify_jamo(c: char) -> Option<Jamo> {
    let cho_index = choseong_index(c);
    let jong_index = jongseong_index(c);
    if cho_index.is_some() || jong_index.is_some() {
        return Some(Jamo::Consonant {
            cho_index,
            jong_index,
        });
    }
    jungseong_index(c).map(|jung_index| Jamo::Vowel { jung_index })
}

/// 영문 키 하나를 두벌식 자판의 호환용 자모로 변환
///
/// 대소문자를 구분하지 않고 소문자 기준으로 조회합니다.
/// (Shift 쌍자음 ㄲ/ㄸ/ㅃ/ㅆ/ㅉ 및 ㅒ/ㅖ 는 다루지 않음)
pub fn keyboard_jamo(c: char) -> Option<char> {
    if !c.is_ascii_alphabetic() {
        return None;
    }

    match c.to_ascii_lowercase() {
        // 자음
        'r' => Some('ㄱ'),
        's' => Some('ㄴ'),
        'e' => Some('ㄷ'),
        'f' => Some('ㄹ'),
        'a' => Some('ㅁ'),
        'q' => Some('ㅂ'),
        't' => Some('ㅅ'),
        'd' => Some('ㅇ'),
        'w' => Some('ㅈ'),
        'c' => Some('ㅊ'),
        'z' => Some('ㅋ'),
        'x' => Some('ㅌ'),
        'v' => Some('ㅍ'),
        'g' => Some('ㅎ'),

        // 모음
        'k' => Some('ㅏ'),
        'o' => Some('ㅐ'),
        'i' => Some('ㅑ'),
        'j' => Some('ㅓ'),
        'p' => Some('ㅔ'),
        'u' => Some('ㅕ'),
        'h' => Some('ㅗ'),
        'y' => Some('ㅛ'),
        'n' => Some('ㅜ'),
        'b' => Some('ㅠ'),
        'm' => Some('ㅡ'),
        'l' => Some('ㅣ'),

        _ => None,
    }
}
