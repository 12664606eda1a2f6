//! Built-in dashboard data.
//!
//! Seed records for every registry. Each process starts from these; only
//! preferences outlive it.

use casedesk_core::case::{Case, CaseStatus, Severity};
use casedesk_core::inbox::{Alert, AlertKind, AlertSeverity, Message, MessageRole};
use casedesk_core::playbook::{Playbook, PlaybookStatus};
use casedesk_core::report::{Report, ReportStatus};
use chrono::NaiveDate;

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn case(
    id: &str,
    server_id: &str,
    status: CaseStatus,
    severity: Severity,
    day: u32,
    analyst: &str,
    user_name: &str,
    user_email: &str,
    case_type: &str,
) -> Case {
    Case {
        id: id.to_string(),
        server_id: server_id.to_string(),
        status,
        severity,
        deadline: march(day),
        analyst: Some(analyst.to_string()),
        user_name: user_name.to_string(),
        user_email: user_email.to_string(),
        case_type: case_type.to_string(),
        notes: Vec::new(),
    }
}

pub fn cases() -> Vec<Case> {
    use CaseStatus::*;
    use Severity::*;
    vec![
        case("CASE-101", "SRV-Alpha", Solved, High, 10, "John Doe", "Alice Johnson", "alice.j@company.com", "Phishing"),
        case("CASE-105", "SRV-Beta", InProgress, Critical, 12, "Jane Smith", "Bob Williams", "bob.w@company.com", "Malware"),
        case("CASE-112", "SRV-Gamma", Pending, Medium, 15, "Mike Ross", "Charlie Brown", "charlie.b@company.com", "Suspicious Login"),
        case("CASE-120", "SRV-Delta", InProgress, High, 14, "Rachel Green", "David Miller", "david.m@company.com", "Data Leakage"),
        case("CASE-125", "SRV-Alpha", Pending, Critical, 16, "Harvey Specter", "Eve Wilson", "eve.w@company.com", "Ransomware"),
        case("CASE-128", "SRV-Beta", Solved, Medium, 18, "Donna Paulsen", "Frank Castle", "frank.c@company.com", "Policy Violation"),
        case("CASE-130", "SRV-Gamma", InProgress, Low, 20, "Louis Litt", "Grace Hopper", "grace.h@company.com", "Unauthorized Access"),
    ]
}

fn playbook(
    id: &str,
    case_id: &str,
    title: &str,
    summary: &str,
    status: PlaybookStatus,
    day: u32,
) -> Playbook {
    Playbook {
        id: id.to_string(),
        case_id: case_id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        status,
        date: march(day),
        steps: Vec::new(),
        commands: Vec::new(),
    }
}

fn with_procedure(mut playbook: Playbook, steps: &[&str], commands: &[&str]) -> Playbook {
    playbook.steps = strings(steps);
    playbook.commands = strings(commands);
    playbook
}

pub fn playbooks() -> Vec<Playbook> {
    use PlaybookStatus::*;
    vec![
        with_procedure(
            playbook("PB-2024-001", "CASE-101", "Phishing Response Protocol", "Steps to isolate and remediate phishing attacks.", Applied, 10),
            &[
                "Isolate the affected user account immediately.",
                "Scan the user's workstation for malware artifacts.",
                "Analyze the email headers to identify the sender source.",
                "Block the sender domain and IP address on the firewall.",
                "Reset user credentials and enforce MFA.",
            ],
            &[
                "Disable-ADAccount -Identity 'username'",
                "Get-MessageTrace -SenderAddress 'attacker@bad.com'",
                "New-NetFirewallRule -DisplayName 'Block Bad IP' -Direction Inbound -RemoteAddress '192.168.1.100' -Action Block",
            ],
        ),
        with_procedure(
            playbook("PB-2024-002", "CASE-105", "Malware Containment Steps", "Procedures for containing malware spread.", InProgress, 12),
            &[
                "Disconnect the infected host from the network.",
                "Capture memory dump for forensic analysis.",
                "Identify the malware process and terminate it.",
                "Search for persistence mechanisms (Registry, Scheduled Tasks).",
                "Run a full system antivirus scan.",
            ],
            &[
                "netsh interface set interface 'Ethernet' admin=disable",
                "procdump.exe -ma <pid> memory.dmp",
                "taskkill /PID <pid> /F",
                "Get-ScheduledTask | Where-Object {$_.State -eq 'Ready'}",
            ],
        ),
        with_procedure(
            playbook("PB-2024-003", "CASE-112", "Suspicious Login Investigation", "Guide for investigating anomalous logins.", NotUsed, 14),
            &[
                "Verify the login location and IP address.",
                "Check for multiple failed login attempts prior to success.",
                "Contact the user to confirm if the activity was legitimate.",
                "If unauthorized, reset password and revoke active sessions.",
            ],
            &[
                "Get-AzureADAuditSignInLogs -UserPrincipalName 'user@domain.com'",
                "Revoke-AzureADUserAllRefreshToken -ObjectId <user-object-id>",
            ],
        ),
        with_procedure(
            playbook("PB-2024-004", "CASE-120", "Data Leakage Mitigation", "Actions to stop and assess data exfiltration.", Rejected, 15),
            &[
                "Identify the sensitive data involved (PII, PHI, IP).",
                "Determine the exfiltration method (Email, USB, Cloud Upload).",
                "Block the exfiltration channel.",
                "Interview the user involved.",
                "Document the incident for legal review.",
            ],
            &[
                "Get-DlpDetailReport -StartDate <date>",
                "Block-SharePointUserAccess -Url <site-url> -User <user-email>",
            ],
        ),
        playbook("PB-2024-005", "CASE-125", "Ransomware First Response", "Immediate actions for ransomware detection.", NotUsed, 16),
        playbook("PB-2024-006", "CASE-128", "DDoS Mitigation Strategy", "Steps to mitigate active DDoS attacks.", InProgress, 17),
        playbook("PB-2024-007", "CASE-130", "Insider Threat Investigation", "Protocol for handling internal security risks.", Applied, 18),
        playbook("PB-2024-008", "CASE-135", "Cloud Storage Misconfiguration", "Remediation for exposed cloud buckets.", NotUsed, 19),
        playbook("PB-2024-009", "CASE-140", "Unauthorized Access Attempt", "Analyzing and blocking unauthorized access.", Rejected, 20),
        playbook("PB-2024-010", "CASE-142", "SQL Injection Response", "Handling web application attacks.", InProgress, 21),
        playbook("PB-2024-011", "CASE-145", "Zero-Day Vulnerability Patching", "Emergency patching for critical vulnerabilities.", NotUsed, 22),
        playbook("PB-2024-012", "CASE-150", "Social Engineering Analysis", "Investigating social engineering attempts.", Applied, 23),
    ]
}

const PHISHING_RESOLUTION: &str = "\
REPORT SUMMARY
--------------------------------------------------
Case ID: CASE-101
Issue: Phishing Attempt

RESOLUTION DETAILS
--------------------------------------------------
We have investigated the reported email and confirmed it was a phishing attempt.

Actions Taken:
- The sender domain has been blocked.
- No sensitive data was compromised.
- Workstation scanned and cleared.

TECHNICAL FINDINGS
--------------------------------------------------
Origin IP: 192.168.x.x (Blocked)
Payload: Credential Harvester

NEXT STEPS FOR USER
--------------------------------------------------
1. Please reset your password immediately.
2. Be cautious of similar emails in the future.
3. Complete the assigned security training module.

Regards,
Security Operations Center";

fn report(id: &str, case_id: &str, analyst: &str, status: ReportStatus, day: u32, title: &str) -> Report {
    Report {
        id: id.to_string(),
        case_id: case_id.to_string(),
        analyst: analyst.to_string(),
        status,
        date: march(day),
        title: title.to_string(),
        body: None,
    }
}

pub fn reports() -> Vec<Report> {
    use ReportStatus::*;
    let mut phishing = report("REP-2024-001", "CASE-101", "John Doe", Sent, 10, "Phishing Analysis Report");
    phishing.body = Some(PHISHING_RESOLUTION.to_string());
    vec![
        phishing,
        report("REP-2024-002", "CASE-105", "Jane Smith", Pending, 12, "Malware Containment Report"),
        report("REP-2024-003", "CASE-112", "Mike Ross", Draft, 15, "Suspicious Activity Report"),
        report("REP-2024-004", "CASE-120", "Rachel Green", Sent, 14, "Data Leakage Assessment"),
        report("REP-2024-005", "CASE-125", "Harvey Specter", Pending, 16, "Ransomware Incident Report"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn alert(
    id: &str,
    title: &str,
    message: &str,
    severity: AlertSeverity,
    case_id: &str,
    time: &str,
    read: bool,
    kind: AlertKind,
) -> Alert {
    Alert {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        severity,
        case_id: Some(case_id.to_string()),
        time: time.to_string(),
        read,
        kind,
    }
}

/// Alerts, newest first.
pub fn alerts() -> Vec<Alert> {
    use AlertKind::*;
    use AlertSeverity::*;
    vec![
        alert("ALT-001", "High-Risk Case Detected", "AI analysis indicates potential ransomware activity in Case #125.", High, "CASE-125", "10 mins ago", false, Ai),
        alert("ALT-002", "SLA Deadline Approaching", "Case #101 is approaching its 4-hour resolution deadline.", Medium, "CASE-101", "30 mins ago", false, System),
        alert("ALT-003", "New Evidence Uploaded", "User uploaded 'firewall_logs.csv' to Case #112.", Low, "CASE-112", "1 hour ago", true, System),
        alert("ALT-004", "Playbook Ready for Review", "AI has generated a response plan for Case #130.", Medium, "CASE-130", "2 hours ago", true, Ai),
    ]
}

fn inbound(id: &str, sender: &str, content: &str, time: &str, read: bool, case_id: &str) -> Message {
    Message {
        id: id.to_string(),
        sender: sender.to_string(),
        role: MessageRole::User,
        content: content.to_string(),
        time: time.to_string(),
        read,
        case_id: Some(case_id.to_string()),
    }
}

/// Messages from affected users, newest first.
pub fn messages() -> Vec<Message> {
    vec![
        inbound("MSG-001", "Eve Wilson", "All my files have a strange extension and there is a ransom note on my desktop.", "5 mins ago", false, "CASE-125"),
        inbound("MSG-002", "Alice Johnson", "I clicked a link in a suspicious email before reporting it. Should I change my password?", "25 mins ago", false, "CASE-101"),
        inbound("MSG-003", "Charlie Brown", "I did not log in from another country yesterday.", "1 hour ago", true, "CASE-112"),
        inbound("MSG-004", "Grace Hopper", "Is my account still locked? I need access for a deployment.", "3 hours ago", true, "CASE-130"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let case_ids: HashSet<String> = cases().into_iter().map(|c| c.id).collect();
        assert_eq!(case_ids.len(), cases().len());
        let playbook_ids: HashSet<String> = playbooks().into_iter().map(|p| p.id).collect();
        assert_eq!(playbook_ids.len(), 12);
        let report_ids: HashSet<String> = reports().into_iter().map(|r| r.id).collect();
        assert_eq!(report_ids.len(), 5);
    }

    #[test]
    fn test_dates_are_valid() {
        assert!(cases().iter().all(|c| c.deadline != NaiveDate::default()));
        assert_eq!(playbooks()[11].date, NaiveDate::from_ymd_opt(2024, 3, 23).unwrap());
    }

    #[test]
    fn test_every_feed_item_references_a_known_case() {
        let case_ids: HashSet<String> = cases().into_iter().map(|c| c.id).collect();
        for alert in alerts() {
            assert!(case_ids.contains(alert.case_id.as_deref().unwrap()));
        }
        for message in messages() {
            assert!(case_ids.contains(message.case_id.as_deref().unwrap()));
        }
    }
}
