use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub score: u32,
    pub misses: u32,
    pub captures: u32,
    pub remaining_ms: Option<f64>,
}

/// Whole seconds left, rounded up so the display never shows 0 while time
/// remains. `None` means an untimed session.
#[must_use]
pub fn format_remaining(remaining_ms: Option<f64>) -> String {
    remaining_ms.map_or_else(
        || "--".to_string(),
        |ms| format!("{}s", (ms / 1000.0).ceil() as u32),
    )
}

#[function_component(Hud)]
pub fn hud(props: &HudProps) -> Html {
    html! {
        <div class="hud" data-testid="hud">
            <span class="hud-score">{ format!("Score {}", props.score) }</span>
            <span class="hud-captures">{ format!("Caught {}", props.captures) }</span>
            <span class="hud-misses">{ format!("Missed {}", props.misses) }</span>
            <span class="hud-timer">{ format_remaining(props.remaining_ms) }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_rounds_up_to_whole_seconds() {
        assert_eq!(format_remaining(Some(60_000.0)), "60s");
        assert_eq!(format_remaining(Some(59_001.0)), "60s");
        assert_eq!(format_remaining(Some(500.0)), "1s");
        assert_eq!(format_remaining(Some(0.0)), "0s");
    }

    #[test]
    fn untimed_sessions_show_a_placeholder() {
        assert_eq!(format_remaining(None), "--");
    }
}
