//! 낱자모 조합 / 완성형 분해
//!
//! `compose_jamo`는 초성이 나오면 항상 새 글자를 시작하는 단순 조합기입니다.
//! 받침은 초성이 될 수 없는 복합 자음(ㄳ, ㄺ 등)만 붙습니다.
//! 자판 입력기처럼 받침을 판단하는 조합은 [`crate::core::hangul_fsm`]을 사용합니다.

use crate::core::unicode::{
    choseong_index, choseong_to_jamo_char, compose_syllable, decompose_syllable,
    jongseong_index, jongseong_to_jamo_char, jungseong_index, jungseong_to_jamo_char,
};

/// 조합 대기 중인 글자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// 대기 없음
    Empty,
    /// 초성만
    Lead(u32),
    /// 초성 + 중성
    LeadVowel(u32, u32),
}

impl Pending {
    /// 대기 중인 글자를 출력
    fn flush(self, output: &mut String) {
        let c = match self {
            Pending::Empty => None,
            Pending::Lead(lead) => choseong_to_jamo_char(lead),
            Pending::LeadVowel(lead, vowel) => compose_syllable(lead, vowel, 0),
        };
        output.extend(c);
    }
}

/// 낱자모를 왼쪽부터 완성형 음절로 조합
///
/// ```
/// use hanfold::core::composer::compose_jamo;
/// assert_eq!(compose_jamo("ㅎㅗㅁㅣ"), "호미");
/// assert_eq!(compose_jamo("ㄷㅏㄺ"), "닭");
/// ```
pub fn compose_jamo(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut pending = Pending::Empty;

    for c in input.chars() {
        if let Some(lead) = choseong_index(c) {
            pending.flush(&mut output);
            pending = Pending::Lead(lead);
        } else if let Some(vowel) = jungseong_index(c) {
            pending = match pending {
                Pending::Lead(lead) => Pending::LeadVowel(lead, vowel),
                other => {
                    other.flush(&mut output);
                    output.push(c);
                    Pending::Empty
                }
            };
        } else if let Some(trail) = jongseong_index(c) {
            // 받침이 붙으면 글자가 완성되므로 바로 출력
            match pending {
                Pending::LeadVowel(lead, vowel) => {
                    output.extend(compose_syllable(lead, vowel, trail));
                }
                other => {
                    other.flush(&mut output);
                    output.push(c);
                }
            }
            pending = Pending::Empty;
        } else {
            pending.flush(&mut output);
            output.push(c);
            pending = Pending::Empty;
        }
    }

    pending.flush(&mut output);
    output
}

/// 완성형 음절을 초성/중성/(종성) 낱자모로 분해
/// 음절이 아닌 문자는 그대로 유지
pub fn decompose_syllables(input: &str) -> String {
    let mut output = String::with_capacity(input.len() * 3);

    for c in input.chars() {
        match decompose_syllable(c) {
            Some((cho, jung, jong)) => {
                output.extend(choseong_to_jamo_char(cho));
                output.extend(jungseong_to_jamo_char(jung));
                output.extend(jongseong_to_jamo_char(jong));
            }
            None => output.push(c),
        }
    }

    output
}
