//! Demo data loaded into the store at startup.
//!
//! Timestamps are fixed strings so route tests and screenshots stay stable.
//! Articles cycle through every approval status; the ones past a gate carry a
//! matching history entry per cleared gate.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use models::{
    AdminUser, ApprovalHistoryEntry, ApprovalProgress, ApprovalStatus, Approver, Article, Cadence, Channel,
    ChannelHealth, ChannelStats, ChannelType, ConnectionStatus, ContentItem, ContentSource, ContentType, Gate,
    IssueBlock, IssueStatus, NewsletterConfiguration, NewsletterIssue, RejectionDetails, Severity, SourceType, UserRole,
};

use crate::state::{Store, StoredArticle};

/// Number of seeded articles.
pub const ARTICLE_COUNT: usize = 25;

const ARTICLE_TOPICS: [(&str, &str, Severity, &[&str]); 10] = [
    ("Ransomware crew exploits VPN appliance flaw", "ransomware", Severity::Critical, &["CVE-2026-10231"]),
    ("Phishing kit targets payroll portals", "phishing", Severity::High, &[]),
    ("Patch Tuesday fixes two zero-days", "vulnerability", Severity::High, &["CVE-2026-21104", "CVE-2026-21177"]),
    ("Supply chain compromise in npm package", "supply_chain", Severity::Critical, &[]),
    ("Cloud misconfiguration exposes backups", "cloud", Severity::Medium, &[]),
    ("Botnet resurfaces with new loader", "malware", Severity::Medium, &[]),
    ("Identity provider MFA bypass disclosed", "identity", Severity::High, &["CVE-2026-30555"]),
    ("OT vendor issues firmware advisory", "ics", Severity::Low, &["CVE-2026-18800"]),
    ("Threat actor profile: financially motivated group", "threat_intel", Severity::Informational, &[]),
    ("Browser sandbox escape patched", "vulnerability", Severity::High, &["CVE-2026-40012"]),
];

/// Status per article index, cycled. Weighted toward pending gates.
const STATUS_CYCLE: [ApprovalStatus; 10] = [
    ApprovalStatus::PendingMarketing,
    ApprovalStatus::PendingBranding,
    ApprovalStatus::PendingSocL1,
    ApprovalStatus::PendingSocL3,
    ApprovalStatus::PendingCiso,
    ApprovalStatus::PendingMarketing,
    ApprovalStatus::Approved,
    ApprovalStatus::Rejected,
    ApprovalStatus::Released,
    ApprovalStatus::PendingSocL1,
];

/// Store populated with every fixture collection.
#[must_use]
pub fn seed() -> Store {
    let mut store = Store {
        articles: articles(),
        channels: channels(),
        configs: configs(),
        issues: issues(),
        content_items: content_items(),
        content_sources: content_sources(),
        users: users(),
        ..Store::default()
    };
    store.blocks.insert(
        "issue-3".to_owned(),
        vec![IssueBlock { content_item_id: "content-1".to_owned(), block_type: models::BlockType::Hero }],
    );
    store
}

fn stamp(day: usize, hour: usize) -> String {
    format!("2026-09-{:02}T{:02}:00:00Z", day % 28 + 1, hour % 24)
}

fn gate_approver(gate: Gate) -> Approver {
    let (id, name) = match gate {
        Gate::Marketing => ("user-marketing", "Maya Patel"),
        Gate::Branding => ("user-branding", "Leo Martins"),
        Gate::SocL1 => ("user-soc1", "Sam Okafor"),
        Gate::SocL3 => ("user-soc3", "Ines Duarte"),
        Gate::Ciso => ("user-ciso", "Dana Whitfield"),
    };
    Approver { id: id.to_owned(), name: name.to_owned() }
}

fn articles() -> Vec<StoredArticle> {
    (0..ARTICLE_COUNT)
        .map(|i| {
            let (title, category, severity, cves) = ARTICLE_TOPICS[i % ARTICLE_TOPICS.len()];
            let status = STATUS_CYCLE[i % STATUS_CYCLE.len()];
            // Rejected articles stop at SOC L1.
            let cleared: Vec<Gate> = match status {
                ApprovalStatus::Rejected => vec![Gate::Marketing, Gate::Branding],
                _ => ApprovalProgress::for_status(status, &[]).completed_gates,
            };
            let approvals = cleared
                .iter()
                .enumerate()
                .map(|(n, gate)| ApprovalHistoryEntry {
                    gate: *gate,
                    approved_by: gate_approver(*gate),
                    approved_at: stamp(i + 1, 10 + n),
                    notes: (n == 0).then(|| "Looks good.".to_owned()),
                })
                .collect();
            let rejection = (status == ApprovalStatus::Rejected).then(|| RejectionDetails {
                reason: "Claims about attribution are not sourced well enough to publish.".to_owned(),
                rejected_by: gate_approver(Gate::SocL1),
                rejected_at: stamp(i + 1, 16),
            });
            let confidence = 0.55 + f64::from(u32::try_from(i % 9).unwrap_or(0)) * 0.05;
            StoredArticle {
                article: Article {
                    id: format!("article-{}", i + 1),
                    title: if i < ARTICLE_TOPICS.len() { title.to_owned() } else { format!("{title} (update {})", i / 10) },
                    content: format!("{title}. Full analysis and mitigation guidance for security teams."),
                    summary: Some(format!("Summary: {}", title.to_lowercase())),
                    ai_category: Some(category.to_owned()),
                    ai_severity: Some(severity),
                    ai_confidence: Some(confidence),
                    cves: cves.iter().map(|c| (*c).to_owned()).collect(),
                    approval_status: status,
                    approval_progress: Some(ApprovalProgress::for_status(status, &cleared)),
                    rejected: status == ApprovalStatus::Rejected,
                    created_at: stamp(i, 8),
                },
                approvals,
                rejection,
            }
        })
        .collect()
}

fn channels() -> Vec<Channel> {
    vec![
        Channel {
            id: "channel-linkedin".to_owned(),
            channel_type: ChannelType::Linkedin,
            account_name: "ACI Security".to_owned(),
            status: ConnectionStatus::Connected,
            health: ChannelHealth::Healthy,
            stats: ChannelStats {
                posts_published: 128,
                total_engagement: 9_412,
                total_impressions: 212_330,
                avg_engagement_rate: 4.43,
                last_post_date: Some(stamp(17, 14)),
            },
            last_error: None,
        },
        Channel {
            id: "channel-twitter".to_owned(),
            channel_type: ChannelType::Twitter,
            account_name: "@aci_sec".to_owned(),
            status: ConnectionStatus::Error,
            health: ChannelHealth::Failing,
            stats: ChannelStats { posts_published: 341, total_engagement: 5_120, total_impressions: 98_004, avg_engagement_rate: 1.9, last_post_date: Some(stamp(12, 9)) },
            last_error: Some("Token expired".to_owned()),
        },
        Channel {
            id: "channel-email".to_owned(),
            channel_type: ChannelType::Email,
            account_name: "newsletter@aci.example".to_owned(),
            status: ConnectionStatus::Connected,
            health: ChannelHealth::Degraded,
            stats: ChannelStats { posts_published: 36, total_engagement: 2_870, total_impressions: 41_500, avg_engagement_rate: 6.92, last_post_date: None },
            last_error: None,
        },
    ]
}

fn configs() -> Vec<NewsletterConfiguration> {
    let entry = |n: u32, name: &str, cadence: Cadence, day: Option<u8>, active: bool| NewsletterConfiguration {
        id: format!("config-{n}"),
        name: name.to_owned(),
        description: Some(format!("{name} for subscribers")),
        segment_id: (n == 1).then(|| "segment-executives".to_owned()),
        cadence,
        send_day_of_week: day,
        timezone: "America/New_York".to_owned(),
        max_blocks: 6,
        content_freshness_days: 7,
        is_active: active,
        created_at: stamp(n as usize, 9),
        updated_at: stamp(n as usize + 3, 9),
    };
    vec![
        entry(1, "Executive Brief", Cadence::Weekly, Some(2), true),
        entry(2, "Threat Digest", Cadence::BiWeekly, Some(4), true),
        entry(3, "Monthly Roundup", Cadence::Monthly, None, false),
    ]
}

fn issues() -> Vec<NewsletterIssue> {
    let entry = |n: u32, config: &str, subject: &str, status: IssueStatus, blocks: u32| NewsletterIssue {
        id: format!("issue-{n}"),
        configuration_id: config.to_owned(),
        issue_number: n,
        subject_line: Some(subject.to_owned()),
        status,
        block_count: blocks,
        created_at: stamp(n as usize + 10, 7),
    };
    vec![
        entry(1, "config-1", "September threat roundup", IssueStatus::Sent, 6),
        entry(2, "config-2", "Zero-day watch", IssueStatus::Draft, 0),
        entry(3, "config-1", "October executive brief", IssueStatus::Draft, 1),
    ]
}

const CONTENT_TITLES: [&str; 6] = [
    "Hardening remote access",
    "Incident response tabletop",
    "Zero trust in practice",
    "Securing CI pipelines",
    "Detection engineering basics",
    "Quarterly product release",
];

const TOPIC_TAGS: [&str; 4] = ["ransomware", "cloud", "identity", "devsecops"];
const FRAMEWORK_TAGS: [&str; 3] = ["NIST CSF", "MITRE ATT&CK", "ISO 27001"];

fn content_items() -> Vec<ContentItem> {
    (0..30usize)
        .map(|i| {
            let content_type = ContentType::ALL[i % ContentType::ALL.len()];
            ContentItem {
                id: format!("content-{}", i + 1),
                source_id: Some(format!("source-{}", i % 3 + 1)),
                title: format!("{} #{}", CONTENT_TITLES[i % CONTENT_TITLES.len()], i + 1),
                url: format!("https://aci.example/resources/{}", i + 1),
                summary: Some("Practical guidance for security leaders.".to_owned()),
                content_type,
                topic_tags: vec![TOPIC_TAGS[i % TOPIC_TAGS.len()].to_owned()],
                framework_tags: vec![FRAMEWORK_TAGS[i % FRAMEWORK_TAGS.len()].to_owned()],
                publish_date: format!("2026-{:02}-{:02}", 8 + i / 20, i % 20 + 1),
                trust_score: 0.6 + f64::from(u32::try_from(i % 5).unwrap_or(0)) * 0.08,
                // Every seventh item is retired.
                is_active: i % 7 != 6,
            }
        })
        .collect()
}

fn content_sources() -> Vec<ContentSource> {
    vec![
        ContentSource {
            id: "source-1".to_owned(),
            name: "ACI Blog".to_owned(),
            source_type: SourceType::Rss,
            feed_url: Some("https://aci.example/blog/feed.xml".to_owned()),
            trust_score: 0.95,
            is_active: true,
            error_count: 0,
            last_error: None,
        },
        ContentSource {
            id: "source-2".to_owned(),
            name: "Threat Research API".to_owned(),
            source_type: SourceType::Api,
            feed_url: None,
            trust_score: 0.82,
            is_active: true,
            error_count: 3,
            last_error: Some("HTTP 503 from upstream".to_owned()),
        },
        ContentSource {
            id: "source-3".to_owned(),
            name: "Editorial picks".to_owned(),
            source_type: SourceType::Manual,
            feed_url: None,
            trust_score: 0.7,
            is_active: true,
            error_count: 0,
            last_error: None,
        },
    ]
}

fn users() -> Vec<AdminUser> {
    let people = [
        ("user-viewer", "Riley Chen", UserRole::Viewer),
        ("user-marketing", "Maya Patel", UserRole::Marketing),
        ("user-branding", "Leo Martins", UserRole::Branding),
        ("user-soc1", "Sam Okafor", UserRole::SocLevel1),
        ("user-soc3", "Ines Duarte", UserRole::SocLevel3),
        ("user-ciso", "Dana Whitfield", UserRole::Ciso),
        ("user-admin", "Alex Romero", UserRole::Admin),
        ("user-root", "Jordan Blake", UserRole::SuperAdmin),
    ];
    people
        .into_iter()
        .map(|(id, name, role)| AdminUser {
            id: id.to_owned(),
            email: format!("{}@aci.example", name.split(' ').next().unwrap_or(id).to_lowercase()),
            name: name.to_owned(),
            role,
        })
        .collect()
}
