//! Interactive question/answer loop.
//!
//! Every line is a question unless it starts with `:`:
//! - `:upload <path>` uploads a document
//! - `:history` prints the exchanges so far, newest first
//! - `:clear` empties the history
//! - `:logout` ends the session and leaves
//! - `:quit` / `:exit` leave

use super::commands::{self, Context};
use crate::{DocqaError, Result};
use docqa_core::{AskFlow, UploadFlow};
use std::io::BufRead;
use std::path::Path;

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Question(&'a str),
    Upload(&'a str),
    History,
    Clear,
    Logout,
    Quit,
    Unknown(&'a str),
}

impl Input<'_> {
    /// Inputs that reach the service.
    fn needs_session(&self) -> bool {
        matches!(self, Input::Question(_) | Input::Upload(_))
    }
}

fn parse(line: &str) -> Input<'_> {
    let Some(command) = line.strip_prefix(':') else {
        return Input::Question(line);
    };
    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(n, a)| (n, a.trim()))
        .unwrap_or((command, ""));
    match name {
        "upload" => Input::Upload(arg),
        "history" => Input::History,
        "clear" => Input::Clear,
        "logout" => Input::Logout,
        "quit" | "exit" | "q" => Input::Quit,
        _ => Input::Unknown(name),
    }
}

/// Run the chat loop until EOF, `:quit` or `:logout`.
pub async fn run(ctx: &Context) -> Result<()> {
    let out = &ctx.out;
    out.banner();
    out.info("Type a question and press Enter. Commands: :upload <path>, :history, :clear, :logout, :quit");
    out.newline();

    let mut ask = AskFlow::new();
    let mut upload = UploadFlow::new();
    let stdin = std::io::stdin();

    loop {
        out.prompt();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            out.newline();
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        let input = parse(line);
        // The session may have been cleared by another process since the last turn
        if input.needs_session() {
            ctx.require_session()?;
        }

        match input {
            Input::Question(question) => {
                if let Err(e) = commands::ask(ctx, &mut ask, question.to_string()).await {
                    out.error(&e.to_string());
                }
            }
            Input::Upload("") => out.error("Usage: :upload <path>"),
            Input::Upload(path) => {
                if let Err(e) = commands::upload(ctx, &mut upload, Path::new(path)).await {
                    out.error(&e.to_string());
                }
            }
            Input::History => {
                if ask.history().is_empty() {
                    out.info("No questions asked yet");
                } else {
                    out.header("Chat History");
                    for exchange in ask.history() {
                        out.exchange(exchange);
                    }
                }
            }
            Input::Clear => {
                ask.clear_history();
                out.info("History cleared");
            }
            Input::Logout => {
                ctx.session
                    .sign_out()
                    .map_err(|e| DocqaError::Flow(e.into()))?;
                out.success("Logged out");
                break;
            }
            Input::Quit => break,
            Input::Unknown(name) => out.error(&format!("Unknown command :{}", name)),
        }
    }

    Ok(())
}
