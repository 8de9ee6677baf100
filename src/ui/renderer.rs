use crate::app::state::AppState;
use crate::terminal::Size;
use crate::ui::frame::Frame;
use crate::ui::layout::{Layout, PaneRect};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

const TREE_TITLE: &str = " TREE ";
const TEXT_TITLE: &str = " TEXT ";
const PATH_TITLE: &str = " PATH ";

/// Paints the whole screen: three bordered panes, the scrolled navigation
/// window with its cursor highlight, and any floating help/message window
/// on top.
pub fn render(state: &AppState, layout: &Layout, size: Size) -> Frame {
    let mut frame = Frame::new(usize::from(size.width), usize::from(size.height));

    draw_pane(&mut frame, &layout.tree, TREE_TITLE);
    draw_pane(&mut frame, &layout.text, TEXT_TITLE);
    draw_pane(&mut frame, &layout.path, PATH_TITLE);

    draw_tree_pane(&mut frame, &layout.tree, state);
    draw_text_pane(&mut frame, &layout.text, state.content());
    draw_path_pane(&mut frame, &layout.path, state.path_text());

    if state.ui().help_visible {
        draw_floating(&mut frame, size, &help_lines(state.clipboard_available()));
    } else if let Some(message) = state.ui().message.as_deref() {
        draw_floating(&mut frame, size, &[message.to_string()]);
    }

    frame
}

fn draw_pane(frame: &mut Frame, rect: &PaneRect, title: &str) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let inner = usize::from(rect.width) - 2;
    let col = usize::from(rect.x);

    let mut top = String::from("┌─");
    top.push_str(title);
    while top.width() < inner + 1 {
        top.push('─');
    }
    top.push('┐');
    frame.blit(col, usize::from(rect.y), vec![Span::new(top)]);

    for row in 1..usize::from(rect.height) - 1 {
        let body = format!("│{}│", " ".repeat(inner));
        frame.blit(col, usize::from(rect.y) + row, vec![Span::new(body)]);
    }

    let bottom = format!("└{}┘", "─".repeat(inner));
    frame.blit(
        col,
        usize::from(rect.y) + usize::from(rect.height) - 1,
        vec![Span::new(bottom)],
    );
}

fn draw_tree_pane(frame: &mut Frame, rect: &PaneRect, state: &AppState) {
    let lines = state.nav_lines();
    let (start, end) = state.scroll().visible_range(lines.len());
    let selected_style = Style::new().color(Color::Black).background(Color::Green);

    for (row, line) in lines[start..end]
        .iter()
        .take(rect.inner_height())
        .enumerate()
    {
        let span = if start + row == state.cursor() {
            let padded = format!("{line:<width$}", width = rect.inner_width());
            Span::styled(padded, selected_style)
        } else {
            Span::new(line.clone())
        };
        frame.blit(
            usize::from(rect.x) + 1,
            usize::from(rect.y) + 1 + row,
            vec![clip(span, rect.inner_width())],
        );
    }
}

/// Keeps a span inside its pane.
fn clip(span: Span, width: usize) -> Span {
    let (head, _) = span.split_at_width(width);
    head
}

fn draw_text_pane(frame: &mut Frame, rect: &PaneRect, content: &str) {
    for (row, line) in content.lines().take(rect.inner_height()).enumerate() {
        frame.blit(
            usize::from(rect.x) + 1,
            usize::from(rect.y) + 1 + row,
            vec![clip(Span::new(line.to_string()), rect.inner_width())],
        );
    }
}

fn draw_path_pane(frame: &mut Frame, rect: &PaneRect, path_text: &str) {
    if rect.height < 3 {
        return;
    }
    frame.blit(
        usize::from(rect.x) + 1,
        usize::from(rect.y) + 1,
        vec![clip(Span::new(path_text.to_string()), rect.inner_width())],
    );
}

/// Centers a bordered window over whatever is already drawn.
fn draw_floating(frame: &mut Frame, size: Size, lines: &[String]) {
    let content_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    let width = content_width + 4;
    let height = lines.len() + 2;

    let screen_width = usize::from(size.width);
    let screen_height = usize::from(size.height);
    if width > screen_width || height > screen_height {
        return;
    }
    let col = (screen_width - width) / 2;
    let row = (screen_height - height) / 2;

    let top = format!("┌{}┐", "─".repeat(width - 2));
    frame.blit(col, row, vec![Span::new(top)]);
    for (offset, line) in lines.iter().enumerate() {
        let body = format!("│ {line:<content_width$} │");
        frame.blit(col, row + 1 + offset, vec![Span::new(body)]);
    }
    let bottom = format!("└{}┘", "─".repeat(width - 2));
    frame.blit(col, row + 1 + lines.len(), vec![Span::new(bottom)]);
}

fn help_lines(clipboard_available: bool) -> Vec<String> {
    let mut lines: Vec<String> = vec![
        "jsontree - help".to_string(),
        "-----------------------------------------".to_string(),
        "j / Down        move one line down".to_string(),
        "k / Up          move one line up".to_string(),
        "J / PageDown    move 15 lines down".to_string(),
        "K / PageUp      move 15 lines up".to_string(),
        "g               jump to the top".to_string(),
        "G               jump to the bottom".to_string(),
        "e / o           expand or collapse node".to_string(),
        "E / O           expand all nodes".to_string(),
        "C               collapse all nodes".to_string(),
    ];
    if clipboard_available {
        lines.push("y               copy path to clipboard".to_string());
        lines.push("Y               copy value to clipboard".to_string());
    }
    lines.push("Enter           close this window".to_string());
    lines.push("h / ?           toggle this help".to_string());
    lines.push("q / Ctrl+C      quit".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::app::state::AppState;
    use crate::terminal::Size;
    use crate::tree::parse::from_str;
    use crate::ui::layout::Layout;

    fn screen_text(state: &AppState, size: Size) -> Vec<String> {
        let layout = Layout::compute(size);
        let frame = render(state, &layout, size);
        frame
            .lines()
            .iter()
            .map(|line| {
                line.spans()
                    .iter()
                    .map(|span| span.text.as_str())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn all_three_panes_carry_their_titles() {
        let tree = from_str(r#"{"x": 1}"#).expect("parse");
        let state = AppState::new(tree, false);
        let size = Size {
            width: 80,
            height: 24,
        };

        let rows = screen_text(&state, size);
        assert!(rows[0].contains(" TREE "));
        assert!(rows[0].contains(" TEXT "));
        assert!(rows[21].contains(" PATH "));
    }

    #[test]
    fn navigation_lines_appear_inside_the_tree_pane() {
        let tree = from_str(r#"{"x": 1, "y": [10, 20]}"#).expect("parse");
        let state = AppState::new(tree, false);
        let size = Size {
            width: 80,
            height: 24,
        };

        let rows = screen_text(&state, size);
        assert!(rows[1].contains("root"));
        assert!(rows[2].contains("├─ x"));
        assert!(rows[3].contains("└─ y"));
    }

    #[test]
    fn help_overlay_is_drawn_when_toggled() {
        let tree = from_str(r#"{"x": 1}"#).expect("parse");
        let mut state = AppState::new(tree, false);
        state.toggle_help();
        let size = Size {
            width: 80,
            height: 30,
        };

        let rows = screen_text(&state, size);
        let all = rows.join("\n");
        assert!(all.contains("jsontree - help"));
        assert!(all.contains("collapse all nodes"));
        assert!(!all.contains("copy path to clipboard"));
    }

    #[test]
    fn clipboard_bindings_show_in_help_only_when_available() {
        let tree = from_str(r#"{"x": 1}"#).expect("parse");
        let mut state = AppState::new(tree, true);
        state.toggle_help();
        let size = Size {
            width: 80,
            height: 30,
        };

        let all = screen_text(&state, size).join("\n");
        assert!(all.contains("copy path to clipboard"));
    }

    #[test]
    fn path_pane_shows_the_selected_path() {
        let tree = from_str(r#"{"x": 1, "y": [10, 20]}"#).expect("parse");
        let mut state = AppState::new(tree, false);
        state.jump_bottom();
        let size = Size {
            width: 80,
            height: 24,
        };

        let rows = screen_text(&state, size);
        assert!(rows[22].contains("[\"y\"][1]"));
    }
}
