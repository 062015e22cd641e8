//! 변형 집합

use std::collections::HashMap;
use std::hash::{BuildHasher, RandomState};

use serde::{Serialize, Serializer};

/// 중복 없는 변형 문자열 집합 (발견 순서 유지)
///
/// 문자열은 `variants`에만 한 번 저장되고, 조회용 색인은 해시 → 위치 목록만 가집니다.
#[derive(Debug, Clone, Default)]
pub struct VariantSet {
    variants: Vec<String>,
    index: HashMap<u64, Vec<usize>>,
    hasher: RandomState,
}

impl VariantSet {
    /// 새 변형 추가, 이미 있거나 빈 문자열이면 false
    pub(crate) fn insert(&mut self, variant: String) -> bool {
        if variant.is_empty() {
            return false;
        }
        let hash = self.hasher.hash_one(variant.as_str());
        let slots = self.index.entry(hash).or_default();
        // 해시 충돌 시 실제 문자열 비교
        if slots.iter().any(|&i| self.variants[i] == variant) {
            return false;
        }
        slots.push(self.variants.len());
        self.variants.push(variant);
        true
    }

    pub fn contains(&self, variant: &str) -> bool {
        let hash = self.hasher.hash_one(variant);
        self.index
            .get(&hash)
            .is_some_and(|slots| slots.iter().any(|&i| self.variants[i] == variant))
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// 발견 순서대로 순회
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.variants.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.variants
    }

    pub fn into_vec(self) -> Vec<String> {
        self.variants
    }
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.into_iter()
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

/// 색인은 파생 데이터이므로 발견 순서의 문자열만 비교
impl PartialEq for VariantSet {
    fn eq(&self, other: &Self) -> bool {
        self.variants == other.variants
    }
}

impl Eq for VariantSet {}

/// JSON 배열로 직렬화
impl Serialize for VariantSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.variants)
    }
}
