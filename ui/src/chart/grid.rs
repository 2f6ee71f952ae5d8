//! Horizontal gridline planning.

use super::scale::ValueDomain;

/// Deviation 50 is the cohort mean; its gridline gets the highlighted
/// treatment when it falls inside the domain.
pub const PAR_VALUE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GridPlan {
    pub step: f64,
    /// Every multiple of `step` inside the domain, lowest first.
    pub levels: Vec<f64>,
    /// True iff the par value lies strictly inside the domain.
    pub crosses_par: bool,
}

/// Label-friendly step for the domain width: wide domains get sparse
/// lines, narrow ones a line per unit.
fn step_for(range: f64) -> f64 {
    if range > 20.0 {
        5.0
    } else if range > 10.0 {
        2.0
    } else {
        1.0
    }
}

pub fn plan(domain: ValueDomain) -> GridPlan {
    let step = step_for(domain.width());
    let mut levels = Vec::new();
    let mut level = (domain.min / step).ceil() * step;
    while level <= domain.max {
        levels.push(level);
        level += step;
    }
    GridPlan {
        step,
        levels,
        crosses_par: domain.min < PAR_VALUE && PAR_VALUE < domain.max,
    }
}
