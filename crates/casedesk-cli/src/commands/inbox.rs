use anyhow::Result;
use casedesk_core::inbox::{AlertQuery, AlertSeverity};
use clap::Subcommand;
use serde::Serialize;

use super::context::AppContext;
use super::output::Output;
use super::{join_words, render};

#[derive(Subcommand, Debug)]
pub enum AlertAction {
    /// Alerts, newest first
    List {
        #[arg(long)]
        severity: Option<AlertSeverity>,
        /// Hide read alerts
        #[arg(long)]
        unread: bool,
    },
    /// Mark one alert read
    Read { id: String },
    /// Mark every alert read
    ReadAll,
}

#[derive(Subcommand, Debug)]
pub enum MessageAction {
    /// Messages, newest first
    List {
        /// Hide read messages
        #[arg(long)]
        unread: bool,
    },
    /// Reply to a user message
    Reply {
        id: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Message the affected user of a case
    Send {
        case_id: String,
        #[arg(required = true)]
        text: Vec<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkedRead {
    marked: usize,
}

pub async fn run_alerts(ctx: &AppContext, action: AlertAction, output: Output) -> Result<()> {
    match action {
        AlertAction::List { severity, unread } => {
            let query = AlertQuery::new().severity(severity).unread_only(unread);
            list_alerts(ctx, &query, output).await
        }
        AlertAction::Read { id } => {
            let alert = ctx.desk.inbox.mark_alert_read(&id).await?;
            output.emit(&alert, |alert| {
                render::success(&format!("{} marked read", alert.id))
            })
        }
        AlertAction::ReadAll => {
            let marked = ctx.desk.inbox.mark_all_read().await?;
            output.emit(&MarkedRead { marked }, |result| {
                render::success(&format!("{} alert(s) marked read", result.marked))
            })
        }
    }
}

pub async fn list_alerts(ctx: &AppContext, query: &AlertQuery, output: Output) -> Result<()> {
    let alerts = ctx.desk.inbox.alerts(query).await?;
    let unread = ctx.desk.inbox.unread_count().await?;
    output.emit(&alerts, |alerts| {
        render::heading(&format!("Alerts ({} unread)", unread));
        if alerts.is_empty() {
            println!("No alerts.");
        }
        for alert in alerts {
            render::alert_row(alert);
        }
    })
}

pub async fn run_messages(ctx: &AppContext, action: MessageAction, output: Output) -> Result<()> {
    match action {
        MessageAction::List { unread } => {
            let messages = ctx.desk.inbox.messages(unread).await?;
            output.emit(&messages, |messages| {
                if messages.is_empty() {
                    println!("No messages.");
                }
                for message in messages {
                    render::message_row(message);
                }
            })
        }
        MessageAction::Reply { id, text } => {
            let reply = ctx.desk.inbox.reply(&id, &join_words(&text)).await?;
            output.emit(&reply, |reply| {
                render::success(&format!("Reply sent as {}", reply.id))
            })
        }
        MessageAction::Send { case_id, text } => {
            let message = ctx
                .desk
                .inbox
                .message_case_user(&case_id, &join_words(&text))
                .await?;
            output.emit(&message, |message| {
                render::success(&format!("Message {} sent on {}", message.id, case_id))
            })
        }
    }
}
