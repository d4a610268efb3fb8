//! Ambient environment preferences, queried synchronously.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The user asked to save data.
    ReducedData,
    ReducedMotion,
    /// Color scheme preference is light.
    PrefersLight,
}

pub trait Environment {
    fn signal(&self, signal: Signal) -> bool;

    /// Either downgrade signal forces image backgrounds.
    fn wants_downgrade(&self) -> bool {
        self.signal(Signal::ReducedData) || self.signal(Signal::ReducedMotion)
    }
}

/// Fixed answers, resolved once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub reduced_data: bool,
    pub reduced_motion: bool,
    pub prefers_light: bool,
}

impl Environment for StaticEnvironment {
    fn signal(&self, signal: Signal) -> bool {
        match signal {
            Signal::ReducedData => self.reduced_data,
            Signal::ReducedMotion => self.reduced_motion,
            Signal::PrefersLight => self.prefers_light,
        }
    }
}
