//! Scene drawing for the widget
//!
//! Free functions that paint the model into a frame. All rectangles come
//! from the `layout` module, so what is drawn here is exactly what the
//! update hit-testing responds to.

use companion::layout::{self, Rect, INPUT_HEIGHT, SLOT_PADDING};
use companion::model::{AgentStatus, AppModel, FocusTarget, Sender};

use super::frame::{Frame, TextPainter};

const TEXT_PAD: f32 = 8.0;
const BUBBLE_GAP: f32 = 6.0;

/// Draw the full scene: background, panel body, and all slots
pub fn draw(frame: &mut Frame, text: &mut TextPainter, model: &AppModel) {
    draw_background(frame, model);
    draw_panel(frame, model);
    draw_model_slot(frame, text, model);
    draw_chat(frame, text, model);
    draw_agent(frame, text, model);
}

/// Window background with a few decorative shapes behind the panel
fn draw_background(frame: &mut Frame, model: &AppModel) {
    let theme = &model.theme;
    frame.clear(theme.background);

    let w = frame.width() as f32;
    let h = frame.height() as f32;
    frame.fill_circle_blended(w * 0.2, h * 0.25, h * 0.3, theme.background_shape);
    frame.fill_circle_blended(w * 0.75, h * 0.7, h * 0.4, theme.background_shape);
    frame.fill_circle_blended(w * 0.55, h * 0.15, h * 0.15, theme.background_shape);
}

/// Panel body and border at the panel's current bounds
fn draw_panel(frame: &mut Frame, model: &AppModel) {
    let theme = &model.theme;
    let widget = layout::widget_rect(&model.panel);
    frame.draw_bordered_rect(widget, theme.panel_bg, theme.panel_border);

    // Seam between the base panel and the agent panel while expanded
    if let Some(agent) = layout::agent_rect(&model.panel) {
        let base = layout::base_rect(&model.panel);
        let seam_x = if agent.x < base.x { base.x } else { agent.x };
        frame.fill_rect(
            Rect::new(seam_x, widget.y, 1.0, widget.height),
            theme.panel_border,
        );
    }
}

/// The model placeholder slot - outlined, with a centered hint
fn draw_model_slot(frame: &mut Frame, text: &mut TextPainter, model: &AppModel) {
    let theme = &model.theme;
    let slot = layout::model_slot(&model.panel);
    frame.fill_rect_blended(slot, (theme.accent & 0x00FFFFFF) | 0x20000000);
    frame.outline_rect(slot, theme.accent);

    let hint = if model.panel.is_dragging() {
        "(dragging)"
    } else {
        "Assistant"
    };
    let hint_w = text.measure_width(hint);
    let hx = slot.x + (slot.width - hint_w) / 2.0;
    let hy = slot.y + (slot.height - text.line_height() as f32) / 2.0;
    text.draw(frame, hx.max(0.0) as usize, hy.max(0.0) as usize, hint, theme.accent);

    let sub = "drag to move, click to expand";
    let sub_w = text.measure_width(sub);
    let sx = slot.x + (slot.width - sub_w) / 2.0;
    text.draw(
        frame,
        sx.max(0.0) as usize,
        (hy + text.line_height() as f32 + 2.0).max(0.0) as usize,
        sub,
        theme.text_dim,
    );
}

/// Chat transcript, waiting indicator, and input field
fn draw_chat(frame: &mut Frame, text: &mut TextPainter, model: &AppModel) {
    let theme = &model.theme;
    let chat = layout::chat_slot(&model.panel);
    let input = layout::chat_input_rect(&model.panel);

    let line_height = text.line_height() as f32;
    let bubble_max = chat.width - 32.0;
    let wrap_cols = ((bubble_max - 2.0 * TEXT_PAD) / text.char_width()).max(1.0) as usize;

    // Lay the transcript out bottom-up so the newest messages stay visible
    let mut y = input.y - BUBBLE_GAP;
    let transcript_top = chat.y;

    if model.chat.is_waiting {
        let h = line_height + 2.0 * TEXT_PAD;
        y -= h;
        let bubble = Rect::new(chat.x, y, text.char_width() * 3.0 + 2.0 * TEXT_PAD, h);
        frame.fill_rect(bubble, theme.bot_bubble);
        let dots = if model.ui.cursor_visible { "..." } else { ".." };
        text.draw(
            frame,
            (bubble.x + TEXT_PAD) as usize,
            (bubble.y + TEXT_PAD) as usize,
            dots,
            theme.text_dim,
        );
        y -= BUBBLE_GAP;
    }

    for message in model.chat.messages.iter().rev() {
        let lines = wrap_text(&message.text, wrap_cols);
        let h = lines.len() as f32 * line_height + 2.0 * TEXT_PAD;
        y -= h;
        if y < transcript_top {
            break;
        }

        let width = lines
            .iter()
            .map(|l| text.measure_width(l))
            .fold(0.0_f32, f32::max)
            + 2.0 * TEXT_PAD;
        let (bubble_x, fill) = match message.sender {
            Sender::User => (chat.x + chat.width - width, theme.user_bubble),
            Sender::Bot => (chat.x, theme.bot_bubble),
        };
        let bubble = Rect::new(bubble_x, y, width, h);
        frame.fill_rect(bubble, fill);

        for (i, line) in lines.iter().enumerate() {
            text.draw(
                frame,
                (bubble.x + TEXT_PAD) as usize,
                (bubble.y + TEXT_PAD + i as f32 * line_height) as usize,
                line,
                theme.text,
            );
        }
        y -= BUBBLE_GAP;
    }

    draw_input_field(
        frame,
        text,
        model,
        input,
        &model.chat.input,
        "Type a message...",
        model.ui.focus == FocusTarget::Chat,
    );
}

/// Agent task panel: title, input with submit button, and status area
fn draw_agent(frame: &mut Frame, text: &mut TextPainter, model: &AppModel) {
    let theme = &model.theme;
    let Some(agent) = layout::agent_rect(&model.panel) else {
        return;
    };
    let interior = agent.inset(SLOT_PADDING);
    let line_height = text.line_height() as f32;

    text.draw(
        frame,
        interior.x as usize,
        interior.y as usize,
        "Agent Tasks",
        theme.text,
    );
    text.draw(
        frame,
        interior.x as usize,
        (interior.y + line_height + 4.0) as usize,
        "Describe a task and press Run",
        theme.text_dim,
    );

    if let Some(input) = layout::agent_input_rect(&model.panel) {
        draw_input_field(
            frame,
            text,
            model,
            input,
            &model.agent.task,
            "Task description...",
            model.ui.focus == FocusTarget::Agent,
        );
    }

    if let Some(button) = layout::agent_submit_rect(&model.panel) {
        let fill = if model.agent.is_running() {
            theme.bot_bubble
        } else {
            theme.button_bg
        };
        frame.draw_bordered_rect(button, fill, theme.panel_border);
        let label = if model.agent.is_running() { "..." } else { "Run" };
        let lw = text.measure_width(label);
        text.draw(
            frame,
            (button.x + (button.width - lw) / 2.0) as usize,
            (button.y + (button.height - line_height) / 2.0) as usize,
            label,
            theme.text,
        );
    }

    // Status area below the input row
    let status_y = interior.y + 64.0 + INPUT_HEIGHT + 16.0;
    match model.agent.status {
        AgentStatus::Idle => {}
        AgentStatus::Running => {
            text.draw(
                frame,
                interior.x as usize,
                status_y as usize,
                "Running...",
                theme.pending,
            );
        }
        AgentStatus::Done => {
            if let Some(result) = &model.agent.result {
                let wrap_cols = (interior.width / text.char_width()).max(1.0) as usize;
                for (i, line) in wrap_text(result, wrap_cols).iter().enumerate() {
                    text.draw(
                        frame,
                        interior.x as usize,
                        (status_y + i as f32 * line_height) as usize,
                        line,
                        theme.success,
                    );
                }
            }
        }
    }
}

/// A single-line input field with placeholder and blinking caret
fn draw_input_field(
    frame: &mut Frame,
    text: &mut TextPainter,
    model: &AppModel,
    rect: Rect,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let theme = &model.theme;
    let border = if focused {
        theme.accent
    } else {
        theme.panel_border
    };
    frame.draw_bordered_rect(rect, theme.input_bg, border);

    let line_height = text.line_height() as f32;
    let tx = rect.x + TEXT_PAD;
    let ty = rect.y + (rect.height - line_height) / 2.0;
    let visible_width = rect.width - 2.0 * TEXT_PAD;

    if value.is_empty() {
        text.draw_tail(frame, tx as usize, ty as usize, visible_width, placeholder, theme.text_dim);
    } else {
        text.draw_tail(frame, tx as usize, ty as usize, visible_width, value, theme.text);
    }

    if focused && model.ui.cursor_visible {
        let shown = (visible_width / text.char_width()).max(0.0) as usize;
        let chars = value.chars().count().min(shown);
        let caret_x = tx + chars as f32 * text.char_width();
        frame.fill_rect(
            Rect::new(caret_x, rect.y + 6.0, 2.0, rect.height - 12.0),
            theme.accent,
        );
    }
}

/// Greedy word wrap to a column budget
fn wrap_text(text: &str, max_cols: usize) -> Vec<String> {
    let max_cols = max_cols.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed <= max_cols {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            // Hard-break words longer than a full line
            let mut rest: Vec<char> = word.chars().collect();
            while rest.len() > max_cols {
                lines.push(rest[..max_cols].iter().collect());
                rest.drain(..max_cols);
            }
            current = rest.into_iter().collect();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_respects_column_budget() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_text_hard_breaks_long_words() {
        let lines = wrap_text("aaaaaaaaaaaaaaaaaaaa", 8);
        assert_eq!(lines, vec!["aaaaaaaa", "aaaaaaaa", "aaaa"]);
    }

    #[test]
    fn test_wrap_text_empty_input_yields_one_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
