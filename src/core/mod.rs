//! 문자 분류 테이블과 한글 조합/분해

pub mod composer;
pub mod hangul_fsm;
pub mod homoglyph;
pub mod jamo_mapper;
pub mod separator;
pub mod unicode;
