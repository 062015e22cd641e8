//! 동형 문자(homoglyph) 테이블
//!
//! 한글 자모와 모양이 비슷한 숫자/영문/기호를 해당 자모로 대응시킵니다.

use std::collections::HashMap;
use std::sync::LazyLock;

/// (동형 문자, 대응 자모)
#[rustfmt::skip]
const HOMOGLYPH_PAIRS: &[(char, char)] = &[
    // ㅇ
    ('0', 'ㅇ'), ('o', 'ㅇ'), ('◯', 'ㅇ'), ('○', 'ㅇ'),
    // ㅣ
    ('1', 'ㅣ'), ('l', 'ㅣ'), ('i', 'ㅣ'), ('|', 'ㅣ'), ('!', 'ㅣ'), ('ǀ', 'ㅣ'),
    // 자음
    ('7', 'ㄱ'), ('L', 'ㄴ'), ('E', 'ㅌ'), ('^', 'ㅅ'), ('人', 'ㅅ'), ('口', 'ㅁ'), ('□', 'ㅁ'),
    // 모음
    ('T', 'ㅜ'), ('H', 'ㅐ'), ('⊥', 'ㅗ'),
    ('-', 'ㅡ'), ('_', 'ㅡ'), ('―', 'ㅡ'), ('─', 'ㅡ'),
];

static HOMOGLYPHS: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| HOMOGLYPH_PAIRS.iter().copied().collect());

/// 동형 문자에 대응하는 자모 조회
///
/// 문자 그대로 먼저 찾고, 없으면 소문자로 바꿔 한 번 더 찾습니다.
/// 따라서 `L`은 ㄴ, `l`은 ㅣ, `O`는 소문자 `o`를 거쳐 ㅇ이 됩니다.
pub fn homoglyph_jamo(c: char) -> Option<char> {
    if let Some(&jamo) = HOMOGLYPHS.get(&c) {
        return Some(jamo);
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l != c => HOMOGLYPHS.get(&l).copied(),
        _ => None,
    }
}
