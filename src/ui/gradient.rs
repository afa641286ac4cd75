use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Create a gradient color between two RGB values.
///
/// # Arguments
/// * `start` - Starting RGB color
/// * `end` - Ending RGB color
/// * `position` - Position in gradient (0.0 to 1.0)
pub fn gradient_color(start: (u8, u8, u8), end: (u8, u8, u8), position: f32) -> Color {
    let position = position.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * position).round() as u8;
    Color::Rgb(mix(start.0, end.0), mix(start.1, end.1), mix(start.2, end.2))
}

/// Bold spans coloring `text` left to right from `start` to `end`.
pub fn gradient_spans(text: &str, start: (u8, u8, u8), end: (u8, u8, u8)) -> Vec<Span<'static>> {
    let total = text.chars().count();
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let position = if total > 1 {
                i as f32 / (total - 1) as f32
            } else {
                0.0
            };
            Span::styled(
                ch.to_string(),
                Style::default()
                    .fg(gradient_color(start, end, position))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_are_exact() {
        let start = (59, 130, 246);
        let end = (6, 182, 212);
        assert_eq!(gradient_color(start, end, 0.0), Color::Rgb(59, 130, 246));
        assert_eq!(gradient_color(start, end, 1.0), Color::Rgb(6, 182, 212));
        assert_eq!(gradient_color(start, end, 7.0), Color::Rgb(6, 182, 212));
    }

    #[test]
    fn spans_cover_every_character() {
        let spans = gradient_spans("CaseWise", (0, 0, 0), (255, 255, 255));
        assert_eq!(spans.len(), 8);
        assert_eq!(spans[0].style.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(spans[7].style.fg, Some(Color::Rgb(255, 255, 255)));
    }
}
