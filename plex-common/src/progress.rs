//! Step state derivation for progress indicators

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Inactive,
}

string_enum!(StepState {
    Completed => "completed",
    Active => "active",
    Inactive => "inactive",
});

/// State of one bar segment in the minimal variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    Completed,
    Upcoming,
}

string_enum!(SegmentState {
    Completed => "completed",
    Upcoming => "upcoming",
});

/// Visual variant of a progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressVariant {
    /// Numbered step indicators joined by connectors
    #[default]
    Default,
    /// A row of bar segments, one per step
    Minimal,
}

string_enum!(ProgressVariant {
    Default => "default",
    Minimal => "minimal",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressColor {
    #[default]
    Default,
    Success,
}

string_enum!(ProgressColor {
    Default => "default",
    Success => "success",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressOrientation {
    #[default]
    Horizontal,
    Vertical,
}

string_enum!(ProgressOrientation {
    Horizontal => "horizontal",
    Vertical => "vertical",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressSize {
    Sm,
    #[default]
    Md,
    Lg,
}

string_enum!(ProgressSize {
    Sm => "sm",
    Md => "md",
    Lg => "lg",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectorStyle {
    #[default]
    Solid,
    Dashed,
}

string_enum!(ConnectorStyle {
    Solid => "solid",
    Dashed => "dashed",
});

/// State of the step at `index` (0-indexed) when `current` (1-indexed) is active.
pub fn step_state(index: usize, current: usize) -> StepState {
    let active = current.checked_sub(1);
    match active {
        Some(active) if index < active => StepState::Completed,
        Some(active) if index == active => StepState::Active,
        _ => StepState::Inactive,
    }
}

/// Label shown in a step indicator when no custom icon is set.
pub fn step_number(index: usize) -> String {
    (index + 1).to_string()
}

/// Whether the step at `index` is the last one and so draws no connector.
pub fn is_last_step(index: usize, total: usize) -> bool {
    index + 1 == total
}

/// Segment states for the minimal variant: every segment before `current`
/// is completed.
pub fn minimal_segments(current: usize, total: usize) -> Vec<SegmentState> {
    (0..total)
        .map(|i| {
            if i < current {
                SegmentState::Completed
            } else {
                SegmentState::Upcoming
            }
        })
        .collect()
}

/// Segment count for the minimal variant. `None` when `total` is missing or
/// non-positive, which is a usage error.
pub fn minimal_total(total: Option<i32>) -> Option<usize> {
    total.filter(|t| *t > 0).map(|t| t as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_states_around_current() {
        let states: Vec<_> = (0..4).map(|i| step_state(i, 2)).collect();
        assert_eq!(
            states,
            vec![
                StepState::Completed,
                StepState::Active,
                StepState::Inactive,
                StepState::Inactive,
            ]
        );
    }

    #[test]
    fn test_current_zero_has_no_active_step() {
        assert_eq!(step_state(0, 0), StepState::Inactive);
    }

    #[test]
    fn test_current_past_end_completes_everything() {
        assert!((0..3).all(|i| step_state(i, 4) == StepState::Completed));
    }

    #[test]
    fn test_last_step() {
        assert!(is_last_step(2, 3));
        assert!(!is_last_step(1, 3));
        assert_eq!(step_number(2), "3");
    }

    #[test]
    fn test_minimal_segments() {
        assert_eq!(
            minimal_segments(2, 4),
            vec![
                SegmentState::Completed,
                SegmentState::Completed,
                SegmentState::Upcoming,
                SegmentState::Upcoming,
            ]
        );
        assert!(minimal_segments(3, 0).is_empty());
    }

    #[test]
    fn test_minimal_total() {
        assert_eq!(minimal_total(Some(5)), Some(5));
        assert_eq!(minimal_total(Some(0)), None);
        assert_eq!(minimal_total(Some(-2)), None);
        assert_eq!(minimal_total(None), None);
    }

    #[test]
    fn test_display_options_parse() {
        assert_eq!("minimal".parse(), Ok(ProgressVariant::Minimal));
        assert_eq!("dashed".parse(), Ok(ConnectorStyle::Dashed));
        assert_eq!(ProgressSize::Lg.as_str(), "lg");
        assert!("huge".parse::<ProgressSize>().is_err());
    }
}
