//! Request Sequencing
//!
//! Fetches are numbered as they are issued. A response is applied only when
//! its number is above the last one applied, so a slow early response can
//! never overwrite a newer page.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Seq(u64);

impl Seq {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
    committed: u64,
    in_flight: u32,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Seq {
        self.issued += 1;
        self.in_flight += 1;
        Seq(self.issued)
    }

    /// Mark `seq` as finished; returns whether its response may be applied
    pub fn settle(&mut self, seq: Seq) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if seq.0 > self.committed {
            self.committed = seq.0;
            true
        } else {
            false
        }
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    pub fn last_committed(&self) -> u64 {
        self.committed
    }
}
