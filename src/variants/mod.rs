//! 우회 표기 변형 생성기
//!
//! 입력 문자열에 기본 변환을 반복 적용하여 도달 가능한 모든 표기를 모읍니다.
//! 금칙어 사전과의 교집합 검사는 호출하는 쪽의 몫입니다.
//!
//! # 사용 예시
//!
//! ```
//! use hanfold::generate_variants;
//!
//! let variants = generate_variants(Some("ㅎㅗㅁㅣ"));
//! assert!(variants.contains("ㅎㅗㅁㅣ"));
//! assert!(variants.contains("호미"));
//!
//! assert!(generate_variants(None).is_empty());
//! assert!(generate_variants(Some("   ")).is_empty());
//! ```
//!
//! # 종료성
//!
//! 각 변환은 유한한 문자 치환이고, 문자열 길이는 분해에 의해서만 늘어나며
//! 그마저 음절당 3글자로 제한되므로 도달 가능한 문자열 수는 유한합니다.
//! 추가로 [`HanfoldConfig::max_variants`]가 결과 크기의 상한이 됩니다.

mod set;
pub mod transform;

use std::collections::{HashSet, VecDeque};

use crate::config::{HanfoldConfig, OversizePolicy};
use crate::core::unicode::decompose_syllable;

pub use set::VariantSet;
pub use transform::Transform;

/// 변형 생성 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// 입력이 허용 길이를 초과 (OversizePolicy::Reject)
    InputTooLarge { length: usize, limit: usize },
}

impl std::fmt::Display for VariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantError::InputTooLarge { length, limit } => {
                write!(f, "입력이 너무 깁니다: 길이 {} (최대 {})", length, limit)
            }
        }
    }
}

impl std::error::Error for VariantError {}

/// 변형 생성기
///
/// 상태가 없으므로 여러 스레드에서 공유해도 됩니다.
#[derive(Debug, Clone, Default)]
pub struct VariantGenerator {
    config: HanfoldConfig,
}

impl VariantGenerator {
    /// 설정을 지정하여 생성기 생성
    pub fn new(config: HanfoldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HanfoldConfig {
        &self.config
    }

    /// 사용할 변환 목록
    fn transforms(&self) -> impl Iterator<Item = Transform> + '_ {
        Transform::ALL.into_iter().filter(|t| {
            *t != Transform::ComposeSyllables || self.config.syllable_composition
        })
    }

    /// 입력의 변형 집합 생성
    ///
    /// 입력이 없거나 공백뿐이면 빈 집합을 돌려줍니다.
    /// 입력의 [`expanded_len`]이 `max_input_chars`를 넘으면 `oversize_policy`에 따라
    /// 앞부분만 사용하거나 [`VariantError::InputTooLarge`]를 반환합니다.
    pub fn generate(&self, text: Option<&str>) -> Result<VariantSet, VariantError> {
        let seed = match text.map(str::trim) {
            Some(seed) if !seed.is_empty() => seed,
            _ => return Ok(VariantSet::default()),
        };

        let seed = self.bound_input(seed)?;
        Ok(self.closure(seed))
    }

    /// 변형 집합 생성, 실패하면 경고를 남기고 빈 집합 반환
    pub fn generate_lossy(&self, text: Option<&str>) -> VariantSet {
        match self.generate(text) {
            Ok(variants) => variants,
            Err(e) => {
                log::warn!("변형 생성 실패, 빈 집합 반환: {}", e);
                VariantSet::default()
            }
        }
    }

    /// 입력 길이 제한 적용
    ///
    /// 길이는 [`expanded_len`] 기준이므로, 제한 안에서 만든 변형을 다시 넣어도
    /// 잘리지 않고 같은 집합 안에 머뭅니다.
    fn bound_input(&self, seed: &str) -> Result<String, VariantError> {
        let limit = self.config.max_input_chars;
        let length = expanded_len(seed);
        if length <= limit {
            return Ok(seed.to_string());
        }

        match self.config.oversize_policy {
            OversizePolicy::Reject => Err(VariantError::InputTooLarge { length, limit }),
            OversizePolicy::Truncate => {
                log::warn!("입력 길이 {} 중 앞 {}만 사용", length, limit);
                let mut used = 0;
                Ok(seed
                    .chars()
                    .take_while(|&c| {
                        used += char_weight(c);
                        used <= limit
                    })
                    .collect())
            }
        }
    }

    /// 너비 우선 탐색으로 변환에 닫힌 집합 계산
    fn closure(&self, seed: String) -> VariantSet {
        let mut variants = VariantSet::default();
        let mut queued: HashSet<String> = HashSet::new();
        let mut worklist: VecDeque<String> = VecDeque::new();

        queued.insert(seed.clone());
        worklist.push_back(seed);

        while let Some(candidate) = worklist.pop_front() {
            if candidate.is_empty() || variants.contains(&candidate) {
                continue;
            }
            if variants.len() >= self.config.max_variants {
                log::warn!(
                    "변형 수 상한({}) 도달, 남은 후보 {}개 생략",
                    self.config.max_variants,
                    worklist.len() + 1
                );
                break;
            }

            for transform in self.transforms() {
                let Some(output) = transform.try_apply(&candidate) else {
                    continue;
                };
                if output.is_empty() || output == candidate || queued.contains(&output) {
                    continue;
                }
                log::trace!("{}: '{}' -> '{}'", transform.name(), candidate, output);
                queued.insert(output.clone());
                worklist.push_back(output);
            }

            variants.insert(candidate);
        }

        log::debug!("변형 {}개 생성", variants.len());
        variants
    }
}

/// 변형이 가질 수 있는 최대 길이
///
/// 완성형 음절은 분해했을 때의 자모 수(2~3), 나머지 문자는 소문자로 바꿨을 때의
/// 문자 수로 셉니다. 어떤 기본 변환도 이 값을 늘리지 않습니다.
pub fn expanded_len(text: &str) -> usize {
    text.chars().map(char_weight).sum()
}

fn char_weight(c: char) -> usize {
    match decompose_syllable(c) {
        Some((_, _, 0)) => 2,
        Some(_) => 3,
        None => c.to_lowercase().count(),
    }
}

/// 기본 설정으로 변형 집합 생성
///
/// 너무 긴 입력은 앞부분만 사용하므로 실패하지 않습니다.
pub fn generate_variants(text: Option<&str>) -> VariantSet {
    VariantGenerator::default().generate_lossy(text)
}

/// 기본 설정으로 변형 목록 생성 (발견 순서)
pub fn generate_content_variants(text: Option<&str>) -> Vec<String> {
    generate_variants(text).into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator_with(config: HanfoldConfig) -> VariantGenerator {
        VariantGenerator::new(config)
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_variants(None).is_empty());
        assert!(generate_variants(Some("")).is_empty());
        assert!(generate_variants(Some(" \t\n")).is_empty());
        assert!(generate_variants(Some("\u{3000}")).is_empty());
    }

    #[test]
    fn test_seed_is_trimmed_and_first() {
        let variants = generate_variants(Some("  ㄱ ㅏ  "));
        assert_eq!(variants.as_slice()[0], "ㄱ ㅏ");
        assert!(!variants.contains("  ㄱ ㅏ  "));
    }

    #[test]
    fn test_no_empty_variants() {
        // 구분 문자 제거 결과는 빈 문자열
        let variants = generate_variants(Some("!!!"));
        assert!(variants.contains("!!!"));
        assert!(variants.iter().all(|v| !v.is_empty()));
    }

    #[test]
    fn test_plain_hangul_fixed_point() {
        let variants = generate_variants(Some("가"));
        assert_eq!(variants.as_slice(), ["가", "ㄱㅏ"]);
    }

    #[test]
    fn test_reject_oversize() {
        let generator = generator_with(HanfoldConfig {
            max_input_chars: 6,
            oversize_policy: OversizePolicy::Reject,
            ..HanfoldConfig::default()
        });
        // 음절은 분해 후 자모 수로 셈: 가나다라 = 8
        assert_eq!(
            generator.generate(Some("가나다라")),
            Err(VariantError::InputTooLarge { length: 8, limit: 6 })
        );
        // 앞뒤 공백은 길이에 포함되지 않음
        assert!(generator.generate(Some("  가나다  ")).is_ok());
    }

    #[test]
    fn test_generate_lossy_returns_empty_on_error() {
        let generator = generator_with(HanfoldConfig {
            max_input_chars: 2,
            oversize_policy: OversizePolicy::Reject,
            ..HanfoldConfig::default()
        });
        assert!(generator.generate_lossy(Some("가나다")).is_empty());
        assert!(generator.generate_lossy(Some("가")).contains("ㄱㅏ"));
    }

    #[test]
    fn test_truncate_oversize() {
        let generator = generator_with(HanfoldConfig {
            max_input_chars: 2,
            ..HanfoldConfig::default()
        });
        let variants = generator.generate(Some("ㄱㅏㄴㅏ")).unwrap();
        assert!(variants.contains("ㄱㅏ"));
        assert!(variants.contains("가"));
        assert!(!variants.contains("ㄱㅏㄴㅏ"));
    }

    #[test]
    fn test_truncate_counts_decomposed_syllables() {
        let generator = generator_with(HanfoldConfig {
            max_input_chars: 5,
            ..HanfoldConfig::default()
        });
        let variants = generator.generate(Some("가나다")).unwrap();
        assert_eq!(variants.as_slice()[0], "가나");

        let variants = generator.generate(Some("각각")).unwrap();
        assert_eq!(variants.as_slice()[0], "각");
    }

    #[test]
    fn test_expanded_len() {
        assert_eq!(expanded_len("가"), 2);
        assert_eq!(expanded_len("각"), 3);
        assert_eq!(expanded_len("와"), 2); // ㅇ + ㅘ
        assert_eq!(expanded_len("ㄱㅏ"), 2);
        assert_eq!(expanded_len("abc"), 3);
        assert_eq!(expanded_len("İ"), 2); // 소문자는 i + U+0307
        assert_eq!(expanded_len(""), 0);
    }

    #[test]
    fn test_members_never_longer_than_seed() {
        let long = "각".repeat(20);
        for input in [long.as_str(), "ㅇㅗㅏㄹㄱ", "dkssud 1ㅣ", "İＡ각"] {
            let limit = expanded_len(input);
            for member in &generate_variants(Some(input)) {
                assert!(expanded_len(member) <= limit, "{:?} -> {:?}", input, member);
            }
        }
    }

    #[test]
    fn test_variant_cap() {
        let generator = generator_with(HanfoldConfig {
            max_variants: 2,
            ..HanfoldConfig::default()
        });
        let variants = generator.generate(Some("dkssud")).unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants.as_slice()[0], "dkssud");
    }

    #[test]
    fn test_syllable_composition_toggle() {
        let without = generator_with(HanfoldConfig {
            syllable_composition: false,
            ..HanfoldConfig::default()
        });
        let variants = without.generate(Some("dkssud")).unwrap();
        assert!(variants.contains("아ㄴ녀ㅇ"));
        assert!(!variants.contains("안녕"));

        let with = VariantGenerator::default();
        assert!(with.generate(Some("dkssud")).unwrap().contains("안녕"));
    }

    #[test]
    fn test_error_display() {
        let err = VariantError::InputTooLarge { length: 10, limit: 5 };
        assert_eq!(err.to_string(), "입력이 너무 깁니다: 길이 10 (최대 5)");
    }
}
