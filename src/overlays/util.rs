use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Anchor a `width` x `height` box to the bottom-right corner, `margin` cells in.
pub fn bottom_right_rect(area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(margin));
    let height = height.min(area.height.saturating_sub(margin));
    let x = area.x + area.width.saturating_sub(width + margin);
    let y = area.y + area.height.saturating_sub(height + margin);
    Rect::new(x, y, width, height)
}

pub fn shortcut_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("[{key}]"), Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {description}")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_right_leaves_margin() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = bottom_right_rect(area, 20, 3, 1);
        assert_eq!(rect, Rect::new(59, 20, 20, 3));
    }

    #[test]
    fn rects_shrink_to_fit() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_rect(area, 30, 10), area);
        assert_eq!(bottom_right_rect(area, 30, 10, 1), Rect::new(0, 0, 9, 3));
    }
}
