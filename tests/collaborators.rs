//! Chat transcript, agent task form, and focus routing

mod common;

use common::*;
use companion::commands::Cmd;
use companion::layout;
use companion::messages::{AgentMsg, ChatMsg, Msg};
use companion::model::{AgentStatus, FocusTarget, Sender};
use companion::update::{scripted_reply, update};

fn type_chat(model: &mut companion::model::AppModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::Chat(ChatMsg::InsertChar(ch)));
    }
}

#[test]
fn test_transcript_starts_with_greeting() {
    let model = test_model(1280, 800);
    assert_eq!(model.chat.messages.len(), 1);
    assert_eq!(model.chat.messages[0].sender, Sender::Bot);
}

#[test]
fn test_chat_submit_appends_user_line_and_schedules_reply() {
    let mut model = test_model(1280, 800);
    type_chat(&mut model, "hello");
    let cmd = update(&mut model, Msg::Chat(ChatMsg::Submit));

    assert_eq!(
        cmd,
        Some(Cmd::SimulateReply {
            prompt: "hello".to_string()
        })
    );
    assert!(model.chat.is_waiting);
    assert!(model.chat.input.is_empty());
    let last = model.chat.messages.last().unwrap();
    assert_eq!(last.sender, Sender::User);
    assert_eq!(last.text, "hello");
}

#[test]
fn test_chat_submit_empty_input_is_noop() {
    let mut model = test_model(1280, 800);
    let cmd = update(&mut model, Msg::Chat(ChatMsg::Submit));
    assert!(cmd.is_none());
    assert_eq!(model.chat.messages.len(), 1);
    assert!(!model.chat.is_waiting);
}

#[test]
fn test_chat_submit_whitespace_only_is_noop() {
    let mut model = test_model(1280, 800);
    type_chat(&mut model, "   ");
    let cmd = update(&mut model, Msg::Chat(ChatMsg::Submit));
    assert!(cmd.is_none());
}

#[test]
fn test_chat_submit_while_waiting_is_noop() {
    let mut model = test_model(1280, 800);
    type_chat(&mut model, "first");
    update(&mut model, Msg::Chat(ChatMsg::Submit));

    model.chat.input = "second".to_string();
    let cmd = update(&mut model, Msg::Chat(ChatMsg::Submit));
    assert!(cmd.is_none());
    assert_eq!(model.chat.messages.last().unwrap().text, "first");
}

#[test]
fn test_reply_ready_appends_bot_line_and_clears_waiting() {
    let mut model = test_model(1280, 800);
    type_chat(&mut model, "hello");
    update(&mut model, Msg::Chat(ChatMsg::Submit));

    let reply = scripted_reply("hello");
    update(&mut model, Msg::Chat(ChatMsg::ReplyReady(reply.clone())));

    assert!(!model.chat.is_waiting);
    let last = model.chat.messages.last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.text, reply);
}

#[test]
fn test_chat_backspace_on_empty_input_is_noop() {
    let mut model = test_model(1280, 800);
    let cmd = update(&mut model, Msg::Chat(ChatMsg::DeleteBackward));
    assert!(cmd.is_none());
}

#[test]
fn test_agent_submit_starts_run() {
    let mut model = test_model(1280, 800);
    let cmd = update(&mut model, Msg::Agent(AgentMsg::Submit));

    assert_eq!(
        cmd,
        Some(Cmd::RunAgentTask {
            task: "example.com company news".to_string()
        })
    );
    assert_eq!(model.agent.status, AgentStatus::Running);
    assert!(model.agent.result.is_none());
}

#[test]
fn test_agent_resubmit_while_running_is_noop() {
    let mut model = test_model(1280, 800);
    update(&mut model, Msg::Agent(AgentMsg::Submit));
    let cmd = update(&mut model, Msg::Agent(AgentMsg::Submit));
    assert!(cmd.is_none());
    assert_eq!(model.agent.status, AgentStatus::Running);
}

#[test]
fn test_agent_completion_records_result() {
    let mut model = test_model(1280, 800);
    update(&mut model, Msg::Agent(AgentMsg::Submit));
    update(
        &mut model,
        Msg::Agent(AgentMsg::TaskCompleted {
            task: "example.com company news".to_string(),
        }),
    );

    assert_eq!(model.agent.status, AgentStatus::Done);
    let result = model.agent.result.as_deref().unwrap();
    assert!(result.contains("example.com company news"));
}

#[test]
fn test_agent_input_frozen_while_running() {
    let mut model = test_model(1280, 800);
    update(&mut model, Msg::Agent(AgentMsg::Submit));
    let before = model.agent.task.clone();
    assert!(update(&mut model, Msg::Agent(AgentMsg::InsertChar('x'))).is_none());
    assert!(update(&mut model, Msg::Agent(AgentMsg::DeleteBackward)).is_none());
    assert_eq!(model.agent.task, before);
}

#[test]
fn test_agent_can_run_again_after_completion() {
    let mut model = test_model(1280, 800);
    update(&mut model, Msg::Agent(AgentMsg::Submit));
    update(
        &mut model,
        Msg::Agent(AgentMsg::TaskCompleted {
            task: "example.com company news".to_string(),
        }),
    );
    let cmd = update(&mut model, Msg::Agent(AgentMsg::Submit));
    assert!(matches!(cmd, Some(Cmd::RunAgentTask { .. })));
    // A fresh run clears the previous result
    assert!(model.agent.result.is_none());
}

#[test]
fn test_click_on_chat_input_focuses_chat() {
    let mut model = test_model(1280, 800);
    model.ui.focus = FocusTarget::Agent;

    let input = layout::chat_input_rect(&model.panel);
    press(&mut model, input.x + 5.0, input.y + 5.0);
    assert_eq!(model.ui.focus, FocusTarget::Chat);
}

#[test]
fn test_click_on_agent_input_focuses_agent() {
    let mut model = test_model(1280, 800);
    // Expand so the agent panel exists, then click its input
    click_panel(&mut model);
    let input = layout::agent_input_rect(&model.panel).unwrap();
    press(&mut model, input.x + 5.0, input.y + 5.0);
    assert_eq!(model.ui.focus, FocusTarget::Agent);
}

#[test]
fn test_click_on_agent_button_submits() {
    let mut model = test_model(1280, 800);
    click_panel(&mut model);
    let button = layout::agent_submit_rect(&model.panel).unwrap();
    let cmd = press(&mut model, button.x + 5.0, button.y + 5.0);
    assert!(matches!(cmd, Some(Cmd::RunAgentTask { .. })));
    assert_eq!(model.agent.status, AgentStatus::Running);
}

#[test]
fn test_collapsed_panel_has_no_agent_slots() {
    let model = test_model(1280, 800);
    assert!(layout::agent_rect(&model.panel).is_none());
    assert!(layout::agent_input_rect(&model.panel).is_none());
    assert!(layout::agent_submit_rect(&model.panel).is_none());
}

#[test]
fn test_scripted_reply_embeds_trimmed_prompt() {
    let reply = scripted_reply("  weather today  ");
    assert!(reply.contains("\"weather today\""));
}
