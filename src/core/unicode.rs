//! 유니코드 한글 조합/분해 유틸리티
//!
//! 호환용 자모(U+3131~U+3163) 알파벳 3종과 완성형 음절(U+AC00~U+D7A3)
//! 산술을 정의합니다. 알파벳의 순서는 음절 인코딩 공식
//! `0xAC00 + (초성 * 21 + 중성) * 28 + 종성` 과 정확히 일치해야 합니다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 알파벳 (호환용 자모, 인덱스 순)
#[rustfmt::skip]
pub const CHOSEONG_JAMO: [char; CHOSEONG_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 알파벳 (호환용 자모, 인덱스 순)
#[rustfmt::skip]
pub const JUNGSEONG_JAMO: [char; JUNGSEONG_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 알파벳 (인덱스 1부터, 0 = 종성 없음은 문자가 없으므로 제외)
#[rustfmt::skip]
pub const JONGSEONG_JAMO: [char; JONGSEONG_COUNT as usize - 1] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 초성 자모 -> 초성 인덱스 (0~18)
pub fn choseong_index(c: char) -> Option<u32> {
    CHOSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 중성 자모 -> 중성 인덱스 (0~20)
pub fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 종성 자모 -> 종성 인덱스 (1~27)
pub fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONG_JAMO
        .iter()
        .position(|&j| j == c)
        .map(|i| i as u32 + 1)
}

/// 초성 인덱스 -> 호환용 자모
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 자모
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_JAMO.get(jung as usize).copied()
}

/// 종성 인덱스 -> 호환용 자모 (0 = 종성 없음이면 None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    jong.checked_sub(1)
        .and_then(|i| JONGSEONG_JAMO.get(i as usize))
        .copied()
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 두 중성을 복합 모음으로 조합
/// 반환: 복합 모음 인덱스 (실패 시 None)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (8, 0) => Some(9),    // ㅗ + ㅏ = ㅘ
        (8, 1) => Some(10),   // ㅗ + ㅐ = ㅙ
        (8, 20) => Some(11),  // ㅗ + ㅣ = ㅚ
        (13, 4) => Some(14),  // ㅜ + ㅓ = ㅝ
        (13, 5) => Some(15),  // ㅜ + ㅔ = ㅞ
        (13, 20) => Some(16), // ㅜ + ㅣ = ㅟ
        (18, 20) => Some(19), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합
/// 반환: 복합 종성 인덱스 (실패 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}

/// 복합 종성을 분리
/// 반환: (남는 종성 인덱스, 다음 글자의 초성 인덱스)
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    match jong {
        3 => Some((1, 9)),   // ㄳ -> ㄱ + ㅅ
        5 => Some((4, 12)),  // ㄵ -> ㄴ + ㅈ
        6 => Some((4, 18)),  // ㄶ -> ㄴ + ㅎ
        9 => Some((8, 0)),   // ㄺ -> ㄹ + ㄱ
        10 => Some((8, 6)),  // ㄻ -> ㄹ + ㅁ
        11 => Some((8, 7)),  // ㄼ -> ㄹ + ㅂ
        12 => Some((8, 9)),  // ㄽ -> ㄹ + ㅅ
        13 => Some((8, 16)), // ㄾ -> ㄹ + ㅌ
        14 => Some((8, 17)), // ㄿ -> ㄹ + ㅍ
        15 => Some((8, 18)), // ㅀ -> ㄹ + ㅎ
        18 => Some((17, 9)), // ㅄ -> ㅂ + ㅅ
        _ => None,
    }
}

/// 단일 종성을 초성 인덱스로 변환
/// 종성이 다음 글자의 초성으로 이동할 때 사용
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    jongseong_to_jamo_char(jong).and_then(choseong_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(CHOSEONG_JAMO.len(), 19);
        assert_eq!(JUNGSEONG_JAMO.len(), 21);
        assert_eq!(JONGSEONG_JAMO.len() + 1, 28);
    }

    #[test]
    fn test_vowel_alphabet_is_contiguous() {
        // 호환용 모음 자모: ㅏ(0x314F) ~ ㅣ(0x3163)
        for (i, &c) in JUNGSEONG_JAMO.iter().enumerate() {
            assert_eq!(c as u32, 0x314F + i as u32);
        }
    }

    #[test]
    fn test_forward_lookup() {
        assert_eq!(choseong_index('ㄱ'), Some(0));
        assert_eq!(choseong_index('ㅎ'), Some(18));
        assert_eq!(choseong_index('ㄳ'), None);
        assert_eq!(jungseong_index('ㅏ'), Some(0));
        assert_eq!(jungseong_index('ㅣ'), Some(20));
        assert_eq!(jongseong_index('ㄱ'), Some(1));
        assert_eq!(jongseong_index('ㄺ'), Some(9));
        assert_eq!(jongseong_index('ㅎ'), Some(27));
        assert_eq!(jongseong_index('ㄸ'), None);
        assert_eq!(choseong_index('a'), None);
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(choseong_to_jamo_char(0), Some('ㄱ'));
        assert_eq!(choseong_to_jamo_char(18), Some('ㅎ'));
        assert_eq!(choseong_to_jamo_char(19), None);
        assert_eq!(jungseong_to_jamo_char(8), Some('ㅗ'));
        assert_eq!(jungseong_to_jamo_char(21), None);
        assert_eq!(jongseong_to_jamo_char(0), None);
        assert_eq!(jongseong_to_jamo_char(4), Some('ㄴ'));
        assert_eq!(jongseong_to_jamo_char(18), Some('ㅄ'));
        assert_eq!(jongseong_to_jamo_char(28), None);
    }

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(18, 8, 0), Some('호'));
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));
        assert_eq!(compose_syllable(19, 0, 0), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글 음절이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
    }

    #[test]
    fn test_combine_and_split() {
        assert_eq!(combine_jungseong(8, 0), Some(9)); // ㅗ + ㅏ = ㅘ
        assert_eq!(combine_jungseong(18, 20), Some(19)); // ㅡ + ㅣ = ㅢ
        assert_eq!(combine_jungseong(0, 0), None);

        assert_eq!(combine_jongseong(8, 1), Some(9)); // ㄹ + ㄱ = ㄺ
        assert_eq!(combine_jongseong(17, 19), Some(18)); // ㅂ + ㅅ = ㅄ
        assert_eq!(combine_jongseong(1, 1), None);

        assert_eq!(split_jongseong(9), Some((8, 0)));
        assert_eq!(split_jongseong(1), None);
    }

    #[test]
    fn test_jongseong_to_choseong() {
        assert_eq!(jongseong_to_choseong(1), Some(0)); // ㄱ
        assert_eq!(jongseong_to_choseong(8), Some(5)); // ㄹ
        assert_eq!(jongseong_to_choseong(27), Some(18)); // ㅎ

        // 복합 종성은 초성이 될 수 없음
        assert_eq!(jongseong_to_choseong(3), None);
        assert_eq!(jongseong_to_choseong(0), None);
    }
}
