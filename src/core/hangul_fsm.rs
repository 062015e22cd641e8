//! 한글 조합 유한 상태 기계 (FSM)
//!
//! 두벌식 입력기와 같은 방식으로 낱자모를 음절로 조합합니다.
//! 중성 뒤 자음은 받침이 되었다가 모음이 이어지면 다음 글자의 초성으로 넘어가고,
//! 복합 모음(ㅘ 등)과 복합 종성(ㄺ 등)도 조합합니다.

use crate::core::jamo_mapper::{classify_jamo, Jamo};
use crate::core::unicode::{
    choseong_to_jamo_char, combine_jongseong, combine_jungseong, compose_syllable,
    jongseong_to_choseong, jongseong_to_jamo_char, jungseong_to_jamo_char, split_jongseong,
};

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong,
    /// 초성+중성 (한 글자 조합 중)
    ChoseongJungseong,
    /// 초성+중성+종성 (한 글자 조합 중)
    ChoseongJungseongJongseong,
}

/// 한글 조합 FSM
pub struct HangulFsm {
    state: State,
    /// 현재 초성 인덱스
    choseong: u32,
    /// 현재 중성 인덱스
    jungseong: u32,
    /// 현재 종성 인덱스 (0 = 없음)
    jongseong: u32,
    /// 출력 버퍼
    output: String,
}

impl HangulFsm {
    /// 새 FSM 생성
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 출력 버퍼 크기를 지정하여 FSM 생성
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: State::Empty,
            choseong: 0,
            jungseong: 0,
            jongseong: 0,
            output: String::with_capacity(capacity),
        }
    }

    /// 문자 하나 입력 (자모가 아니면 그대로 출력)
    pub fn feed_char(&mut self, c: char) {
        match classify_jamo(c) {
            Some(jamo) => self.feed(jamo),
            None => self.feed_passthrough(c),
        }
    }

    /// 자모를 입력하여 상태 전이
    pub fn feed(&mut self, jamo: Jamo) {
        match jamo {
            Jamo::Consonant {
                cho_index: Some(cho_index),
                jong_index,
            } => {
                self.feed_consonant(cho_index, jong_index);
            }
            Jamo::Consonant {
                cho_index: None,
                jong_index: Some(jong_index),
            } => {
                self.feed_final_only(jong_index);
            }
            Jamo::Consonant {
                cho_index: None,
                jong_index: None,
            } => {} // classify_jamo가 만들지 않는 조합
            Jamo::Vowel { jung_index } => {
                self.feed_vowel(jung_index);
            }
        }
    }

    /// 자음 입력 처리
    fn feed_consonant(&mut self, cho_index: u32, jong_index: Option<u32>) {
        match self.state {
            State::Empty => {
                self.choseong = cho_index;
                self.state = State::Choseong;
            }
            State::Choseong => {
                // 기존 초성을 단독 자모로 출력하고, 새 초성으로 교체
                self.output.extend(choseong_to_jamo_char(self.choseong));
                self.choseong = cho_index;
            }
            State::ChoseongJungseong => {
                if let Some(jong) = jong_index {
                    self.jongseong = jong;
                    self.state = State::ChoseongJungseongJongseong;
                } else {
                    // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
                    self.flush_current();
                    self.choseong = cho_index;
                    self.state = State::Choseong;
                }
            }
            State::ChoseongJungseongJongseong => {
                let combined = jong_index.and_then(|jong| combine_jongseong(self.jongseong, jong));
                if let Some(combined) = combined {
                    self.jongseong = combined;
                } else {
                    self.flush_current();
                    self.choseong = cho_index;
                    self.state = State::Choseong;
                }
            }
        }
    }

    /// 초성이 될 수 없는 복합 자음(ㄳ, ㄺ 등) 입력 처리
    fn feed_final_only(&mut self, jong_index: u32) {
        if self.state == State::ChoseongJungseong {
            self.jongseong = jong_index;
            self.state = State::ChoseongJungseongJongseong;
        } else {
            self.flush_current();
            self.output.extend(jongseong_to_jamo_char(jong_index));
        }
    }

    /// 모음 입력 처리
    fn feed_vowel(&mut self, jung_index: u32) {
        match self.state {
            State::Empty => {
                // 초성 없는 모음은 단독 자모로 출력
                self.output.extend(jungseong_to_jamo_char(jung_index));
            }
            State::Choseong => {
                self.jungseong = jung_index;
                self.state = State::ChoseongJungseong;
            }
            State::ChoseongJungseong => {
                if let Some(combined) = combine_jungseong(self.jungseong, jung_index) {
                    self.jungseong = combined;
                } else {
                    // 복합 모음 불가 -> 현재 글자 확정 후 모음만 출력
                    self.flush_current();
                    self.output.extend(jungseong_to_jamo_char(jung_index));
                }
            }
            State::ChoseongJungseongJongseong => {
                // 복합 종성이면 마지막 자음만, 단일 종성이면 전체를 다음 초성으로
                let moved = match split_jongseong(self.jongseong) {
                    Some((remaining_jong, next_cho)) => Some((remaining_jong, next_cho)),
                    None => jongseong_to_choseong(self.jongseong).map(|next_cho| (0, next_cho)),
                };

                match moved {
                    Some((remaining_jong, next_cho)) => {
                        self.jongseong = remaining_jong;
                        self.flush_current();
                        self.choseong = next_cho;
                        self.jungseong = jung_index;
                        self.state = State::ChoseongJungseong;
                    }
                    None => {
                        self.flush_current();
                        self.output.extend(jungseong_to_jamo_char(jung_index));
                    }
                }
            }
        }
    }

    /// 현재 조합 중인 글자를 출력 버퍼에 추가
    fn flush_current(&mut self) {
        let c = match self.state {
            State::Empty => None,
            State::Choseong => choseong_to_jamo_char(self.choseong),
            State::ChoseongJungseong => compose_syllable(self.choseong, self.jungseong, 0),
            State::ChoseongJungseongJongseong => {
                compose_syllable(self.choseong, self.jungseong, self.jongseong)
            }
        };
        self.output.extend(c);
        self.reset_state();
    }

    /// 상태 초기화
    fn reset_state(&mut self) {
        self.state = State::Empty;
        self.choseong = 0;
        self.jungseong = 0;
        self.jongseong = 0;
    }

    /// 조합 대상이 아닌 문자 처리 (숫자, 영문, 완성형 음절 등)
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.output.push(c);
    }

    /// FSM 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.flush_current();
        self.output
    }
}

impl Default for HangulFsm {
    fn default() -> Self {
        Self::new()
    }
}

/// 낱자모 문자열을 입력기 방식으로 음절 조합
///
/// ```
/// use hanfold::core::hangul_fsm::compose_syllables;
/// assert_eq!(compose_syllables("ㅇㅏㄴㄴㅕㅇ"), "안녕");
/// ```
pub fn compose_syllables(input: &str) -> String {
    let mut fsm = HangulFsm::with_capacity(input.len());
    for c in input.chars() {
        fsm.feed_char(c);
    }
    fsm.finish()
}
