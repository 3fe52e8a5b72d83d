use std::borrow::Cow;
use std::marker::PhantomData;

use crate::clock::Clock;
use crate::sink::TraceSink;

/// Timed scope guard (no-op: timing is compiled out of this build).
#[must_use = "the scope closes as soon as the guard is dropped"]
pub struct Measure {
    _thread_bound: PhantomData<*const ()>,
}

impl Measure {
    #[inline(always)]
    pub fn new(_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            _thread_bound: PhantomData,
        }
    }

    #[inline(always)]
    pub fn with_hidden_subs(_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            _thread_bound: PhantomData,
        }
    }

    #[inline(always)]
    pub fn with_options(_name: impl Into<Cow<'static, str>>, _hide_subs: bool) -> Self {
        Self {
            _thread_bound: PhantomData,
        }
    }

    /// Always empty: names are not kept when timing is compiled out.
    #[inline]
    pub fn name(&self) -> &str {
        ""
    }

    #[inline]
    pub fn depth(&self) -> usize {
        0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        true
    }
}

#[inline(always)]
pub fn active_depth() -> usize {
    0
}

#[inline(always)]
pub fn set_clock(_clock: impl Clock + 'static) {}

#[inline(always)]
pub fn set_sink(_sink: impl TraceSink + 'static) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CaptureSink;

    #[test]
    fn guard_is_zero_sized() {
        assert_eq!(std::mem::size_of::<Measure>(), 0);
    }

    #[test]
    fn nothing_is_traced() {
        let sink = CaptureSink::new();
        set_sink(sink.clone());
        {
            let _a = Measure::new("A");
            crate::measure!("B");
            assert_eq!(active_depth(), 0);
        }
        assert!(sink.is_empty());
    }
}
