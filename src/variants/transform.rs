//! 우회 표기를 되돌리는 기본 변환
//!
//! 모든 변환은 실패하지 않으며, 같은 입력에 항상 같은 결과를 냅니다.

use crate::core::composer::{compose_jamo, decompose_syllables};
use crate::core::hangul_fsm::compose_syllables;
use crate::core::homoglyph::homoglyph_jamo;
use crate::core::jamo_mapper::keyboard_jamo;
use crate::core::separator::is_separator;

/// 전각 문자와 ASCII 문자의 코드포인트 차이
const FULLWIDTH_OFFSET: u32 = 0xFEE0;
/// 전각 공백
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// 기본 변환 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// 전각 -> 반각
    Width,
    /// 라틴 문자 소문자화
    Case,
    /// 동형 문자 -> 자모
    Homoglyph,
    /// 두벌식 영문 키 -> 자모
    Keyboard,
    /// 구분 문자 제거
    Separator,
    /// 낱자모 조합 (초성 우선)
    ComposeJamo,
    /// 완성형 분해
    DecomposeSyllables,
    /// 낱자모 조합 (입력기 방식)
    ComposeSyllables,
}

impl Transform {
    /// 적용 순서대로 나열한 모든 변환
    pub const ALL: [Transform; 8] = [
        Transform::Width,
        Transform::Case,
        Transform::Homoglyph,
        Transform::Keyboard,
        Transform::Separator,
        Transform::ComposeJamo,
        Transform::DecomposeSyllables,
        Transform::ComposeSyllables,
    ];

    /// 로그 등에 쓰는 이름
    pub fn name(self) -> &'static str {
        match self {
            Transform::Width => "width",
            Transform::Case => "case",
            Transform::Homoglyph => "homoglyph",
            Transform::Keyboard => "keyboard",
            Transform::Separator => "separator",
            Transform::ComposeJamo => "compose_jamo",
            Transform::DecomposeSyllables => "decompose_syllables",
            Transform::ComposeSyllables => "compose_syllables",
        }
    }

    /// 변환 적용
    pub fn apply(self, input: &str) -> String {
        match self {
            Transform::Width => fold_width(input),
            Transform::Case => fold_case(input),
            Transform::Homoglyph => fold_homoglyphs(input).0,
            Transform::Keyboard => fold_keyboard(input).0,
            Transform::Separator => strip_separators(input),
            Transform::ComposeJamo => compose_jamo(input),
            Transform::DecomposeSyllables => decompose_syllables(input),
            Transform::ComposeSyllables => compose_syllables(input),
        }
    }

    /// 변환 적용, 치환형 변환(동형 문자, 자판)은 바뀐 글자가 없으면 None
    pub fn try_apply(self, input: &str) -> Option<String> {
        match self {
            Transform::Homoglyph => {
                let (output, changed) = fold_homoglyphs(input);
                changed.then_some(output)
            }
            Transform::Keyboard => {
                let (output, changed) = fold_keyboard(input);
                changed.then_some(output)
            }
            other => Some(other.apply(input)),
        }
    }
}

/// 전각 문자(！~～)를 ASCII로, 전각 공백을 일반 공백으로 변환
pub fn fold_width(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c),
            IDEOGRAPHIC_SPACE => ' ',
            _ => c,
        })
        .collect()
}

/// 라틴 문자만 소문자로 변환
pub fn fold_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        if is_latin_letter(c) {
            output.extend(c.to_lowercase());
        } else {
            output.push(c);
        }
    }
    output
}

/// ASCII, Latin-1, Latin Extended-A/B, Latin Extended Additional 영역의 문자
fn is_latin_letter(c: char) -> bool {
    c.is_alphabetic()
        && matches!(
            c as u32,
            0x41..=0x5A | 0x61..=0x7A | 0xC0..=0x24F | 0x1E00..=0x1EFF
        )
}

/// 동형 문자를 자모로 치환
/// 반환: (결과 문자열, 치환 발생 여부)
pub fn fold_homoglyphs(input: &str) -> (String, bool) {
    substitute(input, homoglyph_jamo)
}

/// 두벌식 영문 키를 자모로 치환
/// 반환: (결과 문자열, 치환 발생 여부)
pub fn fold_keyboard(input: &str) -> (String, bool) {
    substitute(input, keyboard_jamo)
}

fn substitute(input: &str, lookup: impl Fn(char) -> Option<char>) -> (String, bool) {
    let mut changed = false;
    let output: String = input
        .chars()
        .map(|c| match lookup(c) {
            Some(replacement) => {
                changed = true;
                replacement
            }
            None => c,
        })
        .collect();
    (output, changed)
}

/// 구분 문자(공백, 숫자, 문장 부호, 보이지 않는 문자) 제거
pub fn strip_separators(input: &str) -> String {
    input.chars().filter(|&c| !is_separator(c)).collect()
}
