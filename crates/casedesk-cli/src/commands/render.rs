//! Plain-text rendering with terminal colours.

use casedesk_application::CaseDetail;
use casedesk_core::case::{Case, CaseStatus, Severity};
use casedesk_core::dashboard::DashboardSummary;
use casedesk_core::filter::Page;
use casedesk_core::inbox::{Alert, AlertSeverity, Message};
use casedesk_core::playbook::{Playbook, PlaybookStatus};
use casedesk_core::report::{Report, ReportStatus};
use casedesk_core::search::{SearchKind, SearchResult, highlight};
use colored::{ColoredString, Colorize};
use strum::IntoEnumIterator;

pub fn case_status(status: CaseStatus) -> ColoredString {
    let label = format!("{:<11}", status.to_string());
    match status {
        CaseStatus::Pending => label.yellow(),
        CaseStatus::InProgress => label.blue(),
        CaseStatus::Solved => label.green(),
    }
}

pub fn severity(severity: Severity) -> ColoredString {
    let label = format!("{:<8}", severity.to_string());
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::High => label.red(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.normal(),
    }
}

pub fn playbook_status(status: PlaybookStatus) -> ColoredString {
    let label = format!("{:<11}", status.to_string());
    match status {
        PlaybookStatus::NotUsed => label.bright_black(),
        PlaybookStatus::InProgress => label.blue(),
        PlaybookStatus::Applied => label.green(),
        PlaybookStatus::Rejected => label.red(),
    }
}

pub fn report_status(status: ReportStatus) -> ColoredString {
    let label = format!("{:<7}", status.to_string());
    match status {
        ReportStatus::Draft => label.bright_black(),
        ReportStatus::Pending => label.yellow(),
        ReportStatus::Sent => label.green(),
    }
}

fn alert_severity(severity: AlertSeverity) -> ColoredString {
    let label = format!("{:<6}", severity.to_string());
    match severity {
        AlertSeverity::High => label.red(),
        AlertSeverity::Medium => label.yellow(),
        AlertSeverity::Low => label.normal(),
    }
}

fn unread_marker(read: bool) -> ColoredString {
    if read { " ".normal() } else { "●".bright_cyan() }
}

pub fn heading(text: &str) {
    println!("{}", text.bold());
}

pub fn success(text: &str) {
    println!("{}", text.green());
}

pub fn case_row(case: &Case, pinned: bool) {
    let pin = if pinned { "★".yellow() } else { " ".normal() };
    println!(
        "{} {:<10} {} {} {}  {:<14} {:<16} {}",
        pin,
        case.id,
        case_status(case.status),
        severity(case.severity),
        case.deadline.format("%Y-%m-%d"),
        case.analyst.as_deref().unwrap_or("Unassigned"),
        case.case_type,
        case.user_name,
    );
}

pub fn case_page(page: &Page<Case>, is_pinned: impl Fn(&str) -> bool) {
    if page.items.is_empty() {
        println!("{}", "No cases match.".bright_black());
        return;
    }
    for case in &page.items {
        case_row(case, is_pinned(&case.id));
    }
    println!(
        "{}",
        format!(
            "page {}/{} · {} case(s)",
            page.number, page.page_count, page.total
        )
        .bright_black()
    );
}

pub fn case_detail(detail: &CaseDetail) {
    let case = &detail.case;
    let pin = if detail.pinned { " ★".yellow() } else { "".normal() };
    println!("{}{}", format!("{} · {}", case.id, case.case_type).bold(), pin);
    println!("Status:   {}", case_status(case.status));
    println!("Severity: {}", severity(case.severity));
    println!("Deadline: {}", case.deadline.format("%Y-%m-%d"));
    println!("Server:   {}", case.server_id);
    println!("User:     {} <{}>", case.user_name, case.user_email);
    println!(
        "Analyst:  {}",
        case.analyst.as_deref().unwrap_or("Unassigned")
    );

    if !case.notes.is_empty() {
        println!();
        heading("Notes");
        for note in &case.notes {
            println!("  - {}", note);
        }
    }

    println!();
    heading("Playbooks");
    if detail.playbooks.is_empty() {
        println!("  {}", "none".bright_black());
    }
    for playbook in &detail.playbooks {
        print!("  ");
        playbook_row(playbook);
    }

    println!();
    heading("Reports");
    if detail.reports.is_empty() {
        println!("  {}", "none".bright_black());
    }
    for report in &detail.reports {
        print!("  ");
        report_row(report);
    }
}

pub fn playbook_row(playbook: &Playbook) {
    println!(
        "{:<12} {} {:<10} {}",
        playbook.id,
        playbook_status(playbook.status),
        playbook.case_id,
        playbook.title
    );
}

pub fn playbook_detail(playbook: &Playbook) {
    println!("{}", format!("{} · {}", playbook.id, playbook.title).bold());
    println!("Case:    {}", playbook.case_id);
    println!("Status:  {}", playbook_status(playbook.status));
    println!("Date:    {}", playbook.date.format("%Y-%m-%d"));
    println!();
    println!("{}", playbook.summary);

    if !playbook.steps.is_empty() {
        println!();
        heading("Steps");
        for (n, step) in playbook.steps.iter().enumerate() {
            println!("  {}. {}", n + 1, step);
        }
    }
    if !playbook.commands.is_empty() {
        println!();
        heading("Commands");
        for command in &playbook.commands {
            println!("  {}", command.bright_cyan());
        }
    }

    let actions: Vec<String> = playbook
        .available_actions()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!();
    println!("{} {}", "Actions:".bold(), actions.join(", "));
}

pub fn report_row(report: &Report) {
    println!(
        "{:<13} {} {:<10} {:<14} {}",
        report.id,
        report_status(report.status),
        report.case_id,
        report.analyst,
        report.title
    );
}

pub fn report_detail(report: &Report) {
    print!("{}", report.render_text());
    let delivery = if report.sent_to_user() {
        "Sent to user".green()
    } else {
        "Not sent to user".yellow()
    };
    println!();
    println!("{}", delivery);
}

pub fn alert_row(alert: &Alert) {
    println!(
        "{} {:<8} {} {:<6} {:<14} {}",
        unread_marker(alert.read),
        alert.id,
        alert_severity(alert.severity),
        alert.kind.to_string(),
        alert.time,
        alert.title.bold()
    );
    println!("           {}", alert.message.bright_black());
}

pub fn message_row(message: &Message) {
    let case = message.case_id.as_deref().unwrap_or("-");
    println!(
        "{} {:<10} {:<14} {:<9} {:<12} {}",
        unread_marker(message.read),
        message.id,
        message.sender,
        case,
        message.time,
        message.content
    );
}

/// `text` with every occurrence of `query` emphasised.
pub fn highlighted(text: &str, query: &str) -> String {
    highlight(text, query)
        .into_iter()
        .map(|segment| {
            if segment.matched {
                segment.text.black().on_yellow().to_string()
            } else {
                segment.text
            }
        })
        .collect()
}

fn kind_heading(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Case => "Cases",
        SearchKind::Playbook => "Playbooks",
        SearchKind::Report => "Reports",
        SearchKind::Alert => "Alerts",
        SearchKind::Message => "Messages",
    }
}

pub fn search_result(result: &SearchResult) {
    if result.query.trim().is_empty() {
        println!("{}", "Type something to search.".bright_black());
        return;
    }
    if result.is_empty() {
        println!("No results for \"{}\"", result.query);
        return;
    }

    let shown = result.items.len();
    if shown < result.total_matches {
        println!(
            "{} results for \"{}\" (showing {})",
            result.total_matches, result.query, shown
        );
    } else {
        println!("{} results for \"{}\"", shown, result.query);
    }

    for kind in SearchKind::iter() {
        let count = result.count(kind);
        if count == 0 {
            continue;
        }
        println!();
        heading(&format!("{} ({})", kind_heading(kind), count));
        for hit in result.items.iter().filter(|hit| hit.kind() == kind) {
            println!(
                "  {:<12} {}  {}",
                hit.id(),
                highlighted(hit.title(), &result.query),
                format!("→ {}", hit.route()).bright_black()
            );
            println!(
                "               {}",
                highlighted(&hit.subtitle(), &result.query)
            );
        }
    }
}

pub fn summary(summary: &DashboardSummary) {
    heading(&format!("Cases ({})", summary.total_cases));
    for entry in &summary.by_status {
        println!("  {} {:>3}", case_status(entry.status), entry.count);
    }

    println!();
    heading("By type");
    for entry in &summary.by_type {
        println!("  {:<16} {:>3}", entry.case_type, entry.count);
    }

    println!();
    heading(&format!("Alerts ({} unread)", summary.unread_alerts));
    for alert in &summary.recent_alerts {
        alert_row(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighted_keeps_text_without_colours() {
        colored::control::set_override(false);
        assert_eq!(highlighted("Phishing Analysis", "phish"), "Phishing Analysis");
        assert_eq!(highlighted("c++ (beta)", "c++ ("), "c++ (beta)");
        colored::control::unset_override();
    }
}
