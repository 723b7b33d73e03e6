//! Rotary encoder handler
//!
//! Decodes quadrature encoder signals into navigation events. Uses a
//! state machine so contact bounce cannot produce a step.

use embedded_hal::digital::InputPin;

use candela_core::control::InputEvent;

/// Decoder states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature encoder on two input pins
pub struct QuadratureEncoder<A, B> {
    a: A,
    b: B,
    state: State,
    last_a: bool,
    last_b: bool,
}

impl<A, B> QuadratureEncoder<A, B>
where
    A: InputPin,
    B: InputPin<Error = A::Error>,
{
    /// Create a new encoder handler, sampling the current pin levels
    pub fn new(mut a: A, mut b: B) -> Result<Self, A::Error> {
        let last_a = a.is_high()?;
        let last_b = b.is_high()?;

        Ok(Self {
            a,
            b,
            state: State::Idle,
            last_a,
            last_b,
        })
    }

    /// Sample the pins and return a step if one completed
    ///
    /// Call every 1-5ms.
    pub fn poll(&mut self) -> Result<Option<InputEvent>, A::Error> {
        let a = self.a.is_high()?;
        let b = self.b.is_high()?;

        if a == self.last_a && b == self.last_b {
            return Ok(None);
        }

        self.last_a = a;
        self.last_b = b;

        Ok(self.decode(a, b))
    }

    /// Quadrature decode
    ///
    /// CW:  A falls first: (1,1) -> (0,1) -> (0,0) -> release
    /// CCW: B falls first: (1,1) -> (1,0) -> (0,0) -> release
    fn decode(&mut self, a: bool, b: bool) -> Option<InputEvent> {
        match self.state {
            State::Idle => {
                if !a && b {
                    self.state = State::CwStep1;
                } else if a && !b {
                    self.state = State::CcwStep1;
                }
                None
            }
            State::CwStep1 => {
                if !a && !b {
                    self.state = State::CwStep2;
                } else if a && b {
                    // bounce
                    self.state = State::Idle;
                }
                None
            }
            State::CwStep2 => {
                if a || b {
                    self.state = State::Idle;
                    return Some(InputEvent::EncoderCw);
                }
                None
            }
            State::CcwStep1 => {
                if !a && !b {
                    self.state = State::CcwStep2;
                } else if a && b {
                    self.state = State::Idle;
                }
                None
            }
            State::CcwStep2 => {
                if a || b {
                    self.state = State::Idle;
                    return Some(InputEvent::EncoderCcw);
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockInput;
    use core::cell::Cell;

    fn step(
        enc: &mut QuadratureEncoder<MockInput<'_>, MockInput<'_>>,
        a: &Cell<bool>,
        b: &Cell<bool>,
        levels: &[(bool, bool)],
    ) -> Option<InputEvent> {
        let mut out = None;
        for &(la, lb) in levels {
            a.set(la);
            b.set(lb);
            if let Some(ev) = enc.poll().unwrap() {
                out = Some(ev);
            }
        }
        out
    }

    #[test]
    fn test_clockwise_detent() {
        let a = Cell::new(true);
        let b = Cell::new(true);
        let mut enc = QuadratureEncoder::new(MockInput(&a), MockInput(&b)).unwrap();

        let ev = step(&mut enc, &a, &b, &[(false, true), (false, false), (true, false), (true, true)]);
        assert_eq!(ev, Some(InputEvent::EncoderCw));
    }

    #[test]
    fn test_counter_clockwise_detent() {
        let a = Cell::new(true);
        let b = Cell::new(true);
        let mut enc = QuadratureEncoder::new(MockInput(&a), MockInput(&b)).unwrap();

        let ev = step(&mut enc, &a, &b, &[(true, false), (false, false), (false, true), (true, true)]);
        assert_eq!(ev, Some(InputEvent::EncoderCcw));
    }

    #[test]
    fn test_bounce_is_rejected() {
        let a = Cell::new(true);
        let b = Cell::new(true);
        let mut enc = QuadratureEncoder::new(MockInput(&a), MockInput(&b)).unwrap();

        let ev = step(&mut enc, &a, &b, &[(false, true), (true, true), (false, true), (true, true)]);
        assert_eq!(ev, None);
    }

    #[test]
    fn test_no_change_no_event() {
        let a = Cell::new(true);
        let b = Cell::new(true);
        let mut enc = QuadratureEncoder::new(MockInput(&a), MockInput(&b)).unwrap();
        assert_eq!(enc.poll().unwrap(), None);
    }
}
