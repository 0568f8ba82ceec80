use clap::{Args, Parser, Subcommand};
use models::paths::{self, ArticleFilter};
use models::{
    AdminUser, ApprovalActionResult, ApprovalHistory, ApprovalStatus, ApproveRequest, Article, BlockType,
    BulkAddBlocksRequest, BulkAddBlocksResponse, Cadence, Channel, ChannelType, ContentItem, ContentSource,
    ContentType, CreateChannelRequest, DisconnectRequest, FieldError, IssueStatus, NewsletterConfigInput,
    NewsletterConfiguration, NewsletterIssue, Page, RejectRequest, UpdateRoleRequest, UserRole,
};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Envelope(#[from] models::EnvelopeError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    Invalid(String),
}

#[derive(Parser, Debug)]
#[command(name = "aci-cli", about = "ACI dashboard review, channel and newsletter CLI")]
struct Cli {
    #[arg(long, env = "ACI_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "ACI_ACCESS_TOKEN")]
    access_token: Option<String>,

    /// Print raw response bodies instead of one line per item.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    access_token: Option<String>,
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    #[command(subcommand)]
    Articles(ArticleCommand),
    #[command(subcommand)]
    Channels(ChannelCommand),
    #[command(subcommand)]
    Configs(ConfigCommand),
    #[command(subcommand)]
    Content(ContentCommand),
    #[command(subcommand)]
    Issues(IssueCommand),
    #[command(subcommand)]
    Users(UserCommand),
}

#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long, default_value_t = 20)]
    page_size: u32,
}

#[derive(Subcommand, Debug)]
enum ArticleCommand {
    /// List articles, optionally only the review queue or one status.
    List {
        #[command(flatten)]
        paging: PageArgs,
        #[arg(long, conflicts_with = "pending")]
        status: Option<ApprovalStatus>,
        /// Only articles still waiting on a gate.
        #[arg(long)]
        pending: bool,
    },
    Show {
        id: String,
    },
    History {
        id: String,
    },
    /// Clear the article's current gate.
    Approve {
        id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    Reject {
        id: String,
        #[arg(long)]
        reason: String,
    },
    /// Publish an article that has cleared every gate.
    Release {
        id: String,
    },
    /// Send a rejected article back to the marketing gate.
    Reset {
        id: String,
    },
}

fn article_filter(status: Option<ApprovalStatus>, pending: bool) -> ArticleFilter {
    match (status, pending) {
        (Some(status), _) => ArticleFilter::Status(status),
        (None, true) => ArticleFilter::Pending,
        (None, false) => ArticleFilter::All,
    }
}

#[derive(Subcommand, Debug)]
enum ChannelCommand {
    List,
    /// Add an email channel by address.
    AddEmail {
        address: String,
    },
    Disconnect {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    List {
        #[command(flatten)]
        paging: PageArgs,
    },
    Show {
        id: String,
    },
    Create(ConfigArgs),
    Update {
        id: String,
        #[command(flatten)]
        config: ConfigArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long, default_value = "weekly")]
    cadence: Cadence,
    /// 0 = Sunday.
    #[arg(long)]
    send_day: Option<u8>,
    #[arg(long, default_value = "UTC")]
    timezone: String,
    #[arg(long, default_value_t = 6)]
    max_blocks: u32,
    #[arg(long, default_value_t = 7)]
    freshness_days: u32,
    #[arg(long, default_value_t = false)]
    inactive: bool,
}

impl ConfigArgs {
    fn into_input(self) -> NewsletterConfigInput {
        NewsletterConfigInput {
            name: self.name,
            description: self.description,
            segment_id: None,
            cadence: self.cadence,
            send_day_of_week: self.send_day,
            timezone: self.timezone,
            max_blocks: self.max_blocks,
            content_freshness_days: self.freshness_days,
            is_active: !self.inactive,
        }
    }
}

#[derive(Subcommand, Debug)]
enum ContentCommand {
    List(ContentFilterArgs),
    Sources,
}

#[derive(Args, Debug, Clone, Default)]
struct ContentFilterArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    content_type: Option<ContentType>,
    #[arg(long)]
    topic_tag: Option<String>,
    #[arg(long)]
    framework_tag: Option<String>,
    /// Inclusive, `YYYY-MM-DD`.
    #[arg(long)]
    from: Option<String>,
    #[arg(long)]
    to: Option<String>,
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long, default_value_t = 20)]
    page_size: u32,
}

impl ContentFilterArgs {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("search", &self.search),
            ("topic_tag", &self.topic_tag),
            ("framework_tag", &self.framework_tag),
            ("date_from", &self.from),
            ("date_to", &self.to),
        ];
        let mut params: Vec<(&'static str, String)> = text
            .into_iter()
            .filter_map(|(name, value)| {
                let value = value.as_deref()?.trim();
                (!value.is_empty()).then(|| (name, value.to_owned()))
            })
            .collect();
        if let Some(ty) = self.content_type {
            params.push(("content_type", ty.as_str().to_owned()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("page_size", self.page_size.to_string()));
        params
    }
}

#[derive(Subcommand, Debug)]
enum IssueCommand {
    List {
        #[arg(long)]
        status: Option<IssueStatus>,
    },
    /// Place content items in a draft issue.
    AddBlocks {
        issue_id: String,
        #[arg(long)]
        block_type: BlockType,
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    List,
    SetRole { id: String, role: UserRole },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        access_token: cli.access_token,
        json: cli.json,
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Articles(command) => run_articles(&ctx, command).await,
        Command::Channels(command) => run_channels(&ctx, command).await,
        Command::Configs(command) => run_configs(&ctx, command).await,
        Command::Content(command) => run_content(&ctx, command).await,
        Command::Issues(command) => run_issues(&ctx, command).await,
        Command::Users(command) => run_users(&ctx, command).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", cli.base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

// =============================================================================
// COMMANDS
// =============================================================================

async fn run_articles(cli: &CliContext, command: ArticleCommand) -> Result<(), CliError> {
    match command {
        ArticleCommand::List { paging, status, pending } => {
            let path = paths::articles_path(paging.page, paging.page_size, article_filter(status, pending));
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            emit_page::<Article>(cli, json, article_line)
        }
        ArticleCommand::Show { id } => {
            let json = api_request(cli, reqwest::Method::GET, &paths::article_path(&id, ""), None).await?;
            emit::<Article>(cli, json, |a| article_line(&a))
        }
        ArticleCommand::History { id } => {
            let path = paths::article_path(&id, "/approval-history");
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            emit::<ApprovalHistory>(cli, json, |h| history_lines(&h).join("\n"))
        }
        ArticleCommand::Approve { id, notes } => {
            let body = ApproveRequest { notes };
            validate(body.validate())?;
            let path = paths::article_path(&id, "/approve");
            let json = api_request(cli, reqwest::Method::POST, &path, Some(serde_json::to_value(&body)?)).await?;
            emit::<ApprovalActionResult>(cli, json, |r| format!("{}  {}", r.id, r.approval_status.label()))
        }
        ArticleCommand::Reject { id, reason } => {
            let body = RejectRequest { reason };
            validate(body.validate())?;
            let path = paths::article_path(&id, "/reject");
            let json = api_request(cli, reqwest::Method::POST, &path, Some(serde_json::to_value(&body)?)).await?;
            emit::<ApprovalActionResult>(cli, json, |r| format!("{}  {}", r.id, r.approval_status.label()))
        }
        ArticleCommand::Release { id } => {
            let json = api_request(cli, reqwest::Method::POST, &paths::article_path(&id, "/release"), None).await?;
            emit::<ApprovalActionResult>(cli, json, |r| format!("{}  {}", r.id, r.approval_status.label()))
        }
        ArticleCommand::Reset { id } => {
            let json = api_request(cli, reqwest::Method::POST, &paths::article_path(&id, "/reset"), None).await?;
            emit::<ApprovalActionResult>(cli, json, |r| format!("{}  {}", r.id, r.approval_status.label()))
        }
    }
}

async fn run_channels(cli: &CliContext, command: ChannelCommand) -> Result<(), CliError> {
    match command {
        ChannelCommand::List => {
            let json = api_request(cli, reqwest::Method::GET, "/api/v1/channels", None).await?;
            emit::<Vec<Channel>>(cli, json, |channels| channels.iter().map(channel_line).collect::<Vec<_>>().join("\n"))
        }
        ChannelCommand::AddEmail { address } => {
            let body = CreateChannelRequest { channel_type: ChannelType::Email, account_name: address };
            let json =
                api_request(cli, reqwest::Method::POST, "/api/v1/channels", Some(serde_json::to_value(&body)?)).await?;
            emit::<Channel>(cli, json, |c| channel_line(&c))
        }
        ChannelCommand::Disconnect { id } => {
            let path = paths::channel_disconnect_path(&id);
            let body = serde_json::to_value(DisconnectRequest::user_initiated())?;
            let json = api_request(cli, reqwest::Method::POST, &path, Some(body)).await?;
            emit::<Channel>(cli, json, |c| channel_line(&c))
        }
    }
}

async fn run_configs(cli: &CliContext, command: ConfigCommand) -> Result<(), CliError> {
    match command {
        ConfigCommand::List { paging } => {
            let path = paths::newsletter_configs_path(paging.page, paging.page_size);
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            emit_page::<NewsletterConfiguration>(cli, json, config_line)
        }
        ConfigCommand::Show { id } => {
            let json = api_request(cli, reqwest::Method::GET, &paths::newsletter_config_path(&id), None).await?;
            emit::<NewsletterConfiguration>(cli, json, |c| config_line(&c))
        }
        ConfigCommand::Create(args) => {
            let input = args.into_input();
            validate(input.validate())?;
            let body = Some(serde_json::to_value(&input)?);
            let json = api_request(cli, reqwest::Method::POST, "/v1/newsletter-configs", body).await?;
            emit::<NewsletterConfiguration>(cli, json, |c| config_line(&c))
        }
        ConfigCommand::Update { id, config } => {
            let input = config.into_input();
            validate(input.validate())?;
            let body = Some(serde_json::to_value(&input)?);
            let json = api_request(cli, reqwest::Method::PUT, &paths::newsletter_config_path(&id), body).await?;
            emit::<NewsletterConfiguration>(cli, json, |c| config_line(&c))
        }
        ConfigCommand::Delete { id } => {
            api_request(cli, reqwest::Method::DELETE, &paths::newsletter_config_path(&id), None).await?;
            println!("deleted {id}");
            Ok(())
        }
    }
}

async fn run_content(cli: &CliContext, command: ContentCommand) -> Result<(), CliError> {
    match command {
        ContentCommand::List(filter) => {
            let path = paths::content_items_path(&filter.query_params());
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            emit_page::<ContentItem>(cli, json, content_line)
        }
        ContentCommand::Sources => {
            let json = api_request(cli, reqwest::Method::GET, "/v1/newsletter/content-sources", None).await?;
            emit_page::<ContentSource>(cli, json, |s| {
                format!("{}  {}  {}  errors={}", s.id, s.name, s.source_type.label(), s.error_count)
            })
        }
    }
}

async fn run_issues(cli: &CliContext, command: IssueCommand) -> Result<(), CliError> {
    match command {
        IssueCommand::List { status } => {
            let path = paths::issues_path(status, None);
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            emit_page::<NewsletterIssue>(cli, json, |i| {
                format!("{}  {}  {}  blocks={}", i.id, i.display_name(), i.status.label(), i.block_count)
            })
        }
        IssueCommand::AddBlocks { issue_id, block_type, items } => {
            let body = BulkAddBlocksRequest { content_item_ids: items, block_type };
            validate(body.validate())?;
            let path = paths::issue_blocks_path(&issue_id);
            let json = api_request(cli, reqwest::Method::POST, &path, Some(serde_json::to_value(&body)?)).await?;
            emit::<BulkAddBlocksResponse>(cli, json, |r| blocks_summary(&r))
        }
    }
}

async fn run_users(cli: &CliContext, command: UserCommand) -> Result<(), CliError> {
    match command {
        UserCommand::List => {
            let json = api_request(cli, reqwest::Method::GET, "/v1/admin/users", None).await?;
            emit::<Vec<AdminUser>>(cli, json, |users| users.iter().map(user_line).collect::<Vec<_>>().join("\n"))
        }
        UserCommand::SetRole { id, role } => {
            let path = paths::user_role_path(&id);
            let body = serde_json::to_value(UpdateRoleRequest { role })?;
            let json = api_request(cli, reqwest::Method::PUT, &path, Some(body)).await?;
            emit::<AdminUser>(cli, json, |u| user_line(&u))
        }
    }
}

// =============================================================================
// HTTP
// =============================================================================

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = cli.access_token.as_deref() {
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}"))?);
    }

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;
    let url = format!("{}{}", cli.base_url.trim_end_matches('/'), path);

    let request = client.request(method, &url);
    let request = if let Some(json) = body {
        request.json(&json)
    } else {
        request
    };

    let response = request.send().await?;
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: failure_message(&value),
        });
    }

    Ok(value)
}

/// Server message from a failure body, or the raw body.
fn failure_message(body: &Value) -> String {
    match models::Envelope::classify(body.clone()) {
        models::Envelope::Failure { message } => message,
        _ => body.to_string(),
    }
}

fn validate(errors: Vec<FieldError>) -> Result<(), CliError> {
    if errors.is_empty() {
        return Ok(());
    }
    let joined = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(CliError::Invalid(joined))
}

// =============================================================================
// OUTPUT
// =============================================================================

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn emit<T: DeserializeOwned>(cli: &CliContext, json: Value, render: impl FnOnce(T) -> String) -> Result<(), CliError> {
    if cli.json {
        return print_json(&json);
    }
    println!("{}", render(models::decode(json)?));
    Ok(())
}

fn emit_page<T: DeserializeOwned>(cli: &CliContext, json: Value, line: impl Fn(&T) -> String) -> Result<(), CliError> {
    if cli.json {
        return print_json(&json);
    }
    let page: Page<T> = models::decode_page(json)?;
    for item in &page.items {
        println!("{}", line(item));
    }
    eprintln!("{}", page_footer(&page.info));
    Ok(())
}

fn page_footer(info: &models::PageInfo) -> String {
    format!("page {}/{} ({} total)", info.page, info.total_pages, info.total)
}

fn article_line(article: &Article) -> String {
    let progress = article
        .approval_progress
        .as_ref()
        .map(models::ApprovalProgress::fraction_label)
        .unwrap_or_default();
    format!("{}  [{}]  {}  {}", article.id, article.approval_status.label(), progress, article.title)
}

fn history_lines(history: &ApprovalHistory) -> Vec<String> {
    let mut lines = vec![format!(
        "{}  {}  {}",
        history.article_id,
        history.current_status.label(),
        history.progress.fraction_label()
    )];
    for entry in &history.approvals {
        let notes = entry.notes.as_deref().map(|n| format!("  \"{n}\"")).unwrap_or_default();
        lines.push(format!("  {}  {}  {}{notes}", entry.gate.label(), entry.approved_by.name, entry.approved_at));
    }
    if let Some(rejection) = &history.rejection_details {
        lines.push(format!("  rejected by {}: {}", rejection.rejected_by.name, rejection.reason));
    }
    lines
}

fn channel_line(channel: &Channel) -> String {
    format!(
        "{}  {}  {}  {}  {}",
        channel.id,
        channel.channel_type.label(),
        channel.account_name,
        channel.status.as_str(),
        channel.health.as_str()
    )
}

fn config_line(config: &NewsletterConfiguration) -> String {
    let active = if config.is_active { "active" } else { "inactive" };
    format!("{}  {}  {}  {active}", config.id, config.name, config.schedule_label())
}

fn content_line(item: &ContentItem) -> String {
    format!("{}  {}  {}  {}", item.id, item.content_type.label(), item.publish_date, item.title)
}

fn user_line(user: &AdminUser) -> String {
    format!("{}  {}  {} (level {})", user.id, user.email, user.role.label(), user.role.permission_level())
}

fn blocks_summary(response: &BulkAddBlocksResponse) -> String {
    let mut summary = format!("created {}, skipped {}", response.created_count, response.skipped_count);
    if !response.skipped_ids.is_empty() {
        summary.push_str(&format!(" ({})", response.skipped_ids.join(", ")));
    }
    summary
}
