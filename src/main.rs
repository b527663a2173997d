//! DreamWorks Painel CLI
//!
//! Command-line front end for the admin panel:
//! - Sign in and out of the game backend
//! - Manage franchises, characters and game modes
//! - Show the KPI dashboard

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dreamworks_panel::client::{load_upload, ApiClient, SessionStore};
use dreamworks_panel::config::{generate_default_config, Config, LoggingConfig};
use dreamworks_panel::panel::{
    failure_message, AuthContext, CharactersPage, Confirm, DashboardPage, DashboardView,
    FranchisesPage, GameModesPage, ImagePolicy, Notifier, Toast, ToastKind,
};
use dreamworks_panel::services::{Backend, CharacterApi, FranchiseApi, GameModeApi, UserApi};
use dreamworks_panel::{
    AliveStatus, Character, EntityId, FileUpload, Franchise, GameMode, Gender, User,
};

#[derive(Parser)]
#[command(name = "dreamworks-panel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Administration panel for the DreamWorks character-guessing game")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and keep the session for later commands
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// End the session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show KPI cards, charts and top characters
    Dashboard,

    /// Manage franchises
    Franchises {
        #[command(subcommand)]
        action: FranchiseCommand,
    },

    /// Manage characters
    Characters {
        #[command(subcommand)]
        action: CharacterCommand,
    },

    /// Manage game modes
    GameModes {
        #[command(subcommand)]
        action: GameModeCommand,
    },

    /// List players
    Users {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum FranchiseCommand {
    List,
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        /// Remote cover image
        #[arg(long)]
        image_url: Option<String>,
        /// Local cover image
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Default)]
pub struct CharacterFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Franchise id
    #[arg(long)]
    franchise: Option<String>,
    /// Repeat for several emojis
    #[arg(long = "emoji")]
    emojis: Vec<String>,
    #[arg(long)]
    race: Vec<String>,
    #[arg(long)]
    ethnicity: Vec<String>,
    #[arg(long)]
    hair: Option<String>,
    /// MALE, FEMALE or OTHER
    #[arg(long)]
    gender: Option<Gender>,
    /// ALIVE, DEAD or UNKNOWN
    #[arg(long)]
    alive_status: Option<AliveStatus>,
    #[arg(long)]
    protagonist: Option<bool>,
    #[arg(long)]
    antagonist: Option<bool>,
    /// Primary image file
    #[arg(long)]
    image: Option<PathBuf>,
    /// Secondary image file
    #[arg(long)]
    secondary_image: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum CharacterCommand {
    List,
    Show {
        id: String,
    },
    Create {
        #[command(flatten)]
        fields: CharacterFields,
    },
    Update {
        id: String,
        #[command(flatten)]
        fields: CharacterFields,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove the primary image
    DeleteImage {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum GameModeCommand {
    List,
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Create the mode disabled
        #[arg(long)]
        inactive: bool,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum UserCommand {
    List,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a default config file
    Init {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Prints toasts as status lines and remembers whether any was an error
#[derive(Default)]
struct ConsoleNotifier {
    failed: Cell<bool>,
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => println!("{}", toast.message),
            ToastKind::Error => {
                self.failed.set(true);
                eprintln!("Erro: {}", toast.message);
            }
        }
    }
}

/// `[y/N]` prompt on stdin, or a fixed yes with `--yes`
struct StdinConfirm {
    assume_yes: bool,
}

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", message);
        if std::io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "s" | "sim")
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("dreamworks_panel={}", logging.level)),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_tracing(&config.logging);

    let session = SessionStore::new(config.session_path());
    let cookies = session.load();
    let client = ApiClient::with_cookies(&config.api.base_url, cookies.as_deref())
        .context("Invalid backend URL")?;
    let backend = Backend::new(client.clone());
    let notifier = ConsoleNotifier::default();
    let images = config.images.policy();
    let json = cli.format == "json";

    match cli.command {
        Commands::Login { email, password } => {
            let mut auth = AuthContext::new();
            let user = auth
                .login(&backend.auth, &email, &password)
                .await
                .map_err(|e| anyhow!(failure_message(&e, "Falha no login")))?;
            println!("Logado como {} ({:?})", user.email, user.role);
        }

        Commands::Logout => {
            let mut auth = AuthContext::new();
            let redirect = auth.logout(&backend.auth).await;
            session.clear()?;
            tracing::debug!(to = redirect.0, "Signed out");
            println!("Sessão encerrada");
            return Ok(());
        }

        Commands::Whoami => {
            let mut auth = AuthContext::new();
            auth.initialize(&backend.auth).await;
            match auth.user() {
                Some(user) if json => print_json(user)?,
                Some(user) => print_users(std::slice::from_ref(user)),
                None => {
                    eprintln!("Nenhuma sessão ativa. Use `dreamworks-panel login`.");
                    std::process::exit(1);
                }
            }
        }

        Commands::Dashboard => {
            let mut page = DashboardPage::new(&backend.dashboard);
            page.mount().await;
            if page.kpi().is_none() {
                eprintln!("Erro ao carregar KPIs");
                std::process::exit(1);
            }
            let view = page.view();
            if json {
                print_json(&view)?;
            } else {
                print_dashboard(&view);
            }
        }

        Commands::Franchises { action } => {
            run_franchises(action, &backend, &notifier, &images, json).await?;
        }

        Commands::Characters { action } => {
            run_characters(action, &backend, &notifier, &images, json).await?;
        }

        Commands::GameModes { action } => {
            run_game_modes(action, &backend, &notifier, json).await?;
        }

        Commands::Users {
            action: UserCommand::List,
        } => {
            let users = backend.users.get_all().await?;
            if json {
                print_json(&users)?;
            } else {
                print_users(&users);
            }
        }

        Commands::Config {
            action: ConfigCommand::Init { output },
        } => {
            return write_default_config(output.as_deref());
        }
    }

    if let Some(header) = client.cookie_header() {
        session.save(&header)?;
    }

    if notifier.failed.get() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_franchises(
    action: FranchiseCommand,
    backend: &Backend,
    notifier: &ConsoleNotifier,
    images: &ImagePolicy,
    json: bool,
) -> anyhow::Result<()> {
    let mut page = FranchisesPage::new(&backend.franchises, notifier);

    match action {
        FranchiseCommand::List => {
            page.mount().await;
            if json {
                print_json(page.list.items())?;
            } else {
                print_franchises(page.list.items(), images);
            }
        }

        FranchiseCommand::Show { id } => {
            let franchise = backend.franchises.get_by_id(&EntityId::new(id)).await?;
            if json {
                print_json(&franchise)?;
            } else {
                print_franchises(std::slice::from_ref(&franchise), images);
            }
        }

        FranchiseCommand::Create {
            name,
            image_url,
            file,
        } => {
            page.open_create();
            page.form.name = name;
            page.form.image_url = image_url.unwrap_or_default();
            page.form.file = read_optional(file.as_deref()).await?;
            page.submit().await;
        }

        FranchiseCommand::Update {
            id,
            name,
            image_url,
            file,
        } => {
            let current = backend.franchises.get_by_id(&EntityId::new(id)).await?;
            page.open_edit(&current);
            if let Some(name) = name {
                page.form.name = name;
            }
            page.form.image_url = image_url.unwrap_or_default();
            page.form.file = read_optional(file.as_deref()).await?;
            page.submit().await;
        }

        FranchiseCommand::Delete { id, yes } => {
            let target = backend.franchises.get_by_id(&EntityId::new(id)).await?;
            page.delete(&target, &StdinConfirm { assume_yes: yes }).await;
        }
    }

    Ok(())
}

async fn run_characters(
    action: CharacterCommand,
    backend: &Backend,
    notifier: &ConsoleNotifier,
    images: &ImagePolicy,
    json: bool,
) -> anyhow::Result<()> {
    let mut page = CharactersPage::new(&backend.characters, &backend.franchises, notifier);

    match action {
        CharacterCommand::List => {
            page.mount().await;
            if json {
                print_json(page.list.items())?;
            } else {
                print_characters(&page, images);
            }
        }

        CharacterCommand::Show { id } => {
            let character = backend.characters.get_by_id(&EntityId::new(id)).await?;
            if json {
                print_json(&character)?;
            } else {
                print_character_detail(&character, images);
            }
        }

        CharacterCommand::Create { fields } => {
            page.open_create();
            apply_character_fields(&mut page, fields).await?;
            page.submit().await;
        }

        CharacterCommand::Update { id, fields } => {
            let current = backend.characters.get_by_id(&EntityId::new(id)).await?;
            page.open_edit(&current);
            apply_character_fields(&mut page, fields).await?;
            page.submit().await;
        }

        CharacterCommand::Delete { id, yes } => {
            let target = backend.characters.get_by_id(&EntityId::new(id)).await?;
            page.delete(&target, &StdinConfirm { assume_yes: yes }).await;
        }

        CharacterCommand::DeleteImage { id } => {
            match backend.characters.delete_image(&EntityId::new(id)).await {
                Ok(_) => notifier.success("Imagem removida"),
                Err(e) => notifier.error(&failure_message(&e, "Erro ao remover imagem")),
            }
        }
    }

    Ok(())
}

/// Overlay command-line values on the prefilled form
async fn apply_character_fields(
    page: &mut CharactersPage<'_>,
    fields: CharacterFields,
) -> anyhow::Result<()> {
    let form = &mut page.form;

    if let Some(name) = fields.name {
        form.name = name;
    }
    if let Some(description) = fields.description {
        form.description = description;
    }
    if let Some(franchise) = fields.franchise {
        form.franchise_id = franchise;
    }
    if !fields.emojis.is_empty() {
        form.emojis = fields.emojis.into_iter().collect();
    }
    if !fields.race.is_empty() {
        form.race = fields.race.into_iter().collect();
    }
    if !fields.ethnicity.is_empty() {
        form.ethnicity = fields.ethnicity.into_iter().collect();
    }
    if let Some(hair) = fields.hair {
        form.hair = hair;
    }
    if let Some(gender) = fields.gender {
        form.gender = gender;
    }
    if let Some(status) = fields.alive_status {
        form.alive_status = status;
    }
    if let Some(protagonist) = fields.protagonist {
        form.is_protagonist = protagonist;
    }
    if let Some(antagonist) = fields.antagonist {
        form.is_antagonist = antagonist;
    }
    form.file1 = read_optional(fields.image.as_deref()).await?;
    form.file2 = read_optional(fields.secondary_image.as_deref()).await?;

    Ok(())
}

async fn run_game_modes(
    action: GameModeCommand,
    backend: &Backend,
    notifier: &ConsoleNotifier,
    json: bool,
) -> anyhow::Result<()> {
    let mut page = GameModesPage::new(&backend.game_modes, notifier);

    match action {
        GameModeCommand::List => {
            page.mount().await;
            if json {
                print_json(page.list.items())?;
            } else {
                print_game_modes(page.list.items());
            }
        }

        GameModeCommand::Show { id } => {
            let mode = backend.game_modes.get_by_id(&EntityId::new(id)).await?;
            if json {
                print_json(&mode)?;
            } else {
                print_game_modes(std::slice::from_ref(&mode));
            }
        }

        GameModeCommand::Create {
            name,
            description,
            inactive,
        } => {
            page.open_create();
            page.form.name = name;
            page.form.description = description;
            page.form.is_active = !inactive;
            page.submit().await;
        }

        GameModeCommand::Update {
            id,
            name,
            description,
            active,
        } => {
            let current = backend.game_modes.get_by_id(&EntityId::new(id)).await?;
            page.open_edit(&current);
            if let Some(name) = name {
                page.form.name = name;
            }
            if let Some(description) = description {
                page.form.description = description;
            }
            if let Some(active) = active {
                page.form.is_active = active;
            }
            page.submit().await;
        }

        GameModeCommand::Delete { id, yes } => {
            let target = backend.game_modes.get_by_id(&EntityId::new(id)).await?;
            page.delete(&target, &StdinConfirm { assume_yes: yes }).await;
        }
    }

    Ok(())
}

async fn read_optional(path: Option<&Path>) -> anyhow::Result<Option<FileUpload>> {
    match path {
        Some(path) => {
            let upload = load_upload(path)
                .await
                .with_context(|| format!("Failed to read {:?}", path))?;
            Ok(Some(upload))
        }
        None => Ok(None),
    }
}

fn write_default_config(output: Option<&Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn print_franchises(franchises: &[Franchise], images: &ImagePolicy) {
    if franchises.is_empty() {
        println!("Nenhuma franquia cadastrada.");
        return;
    }

    println!(
        "{:<8} {:<28} {:<12} {:<12} {}",
        "ID", "Nome", "Personagens", "Criada em", "Imagem"
    );
    println!("{}", "-".repeat(90));
    for f in franchises {
        println!(
            "{:<8} {:<28} {:<12} {:<12} {}",
            truncate(f.id.as_str(), 8),
            truncate(&f.name, 28),
            f.character_count(),
            f.created_on(),
            images.display_url(f.image_url.as_deref())
        );
    }
}

fn print_characters(page: &CharactersPage<'_>, images: &ImagePolicy) {
    let characters = page.list.items();
    if characters.is_empty() {
        println!("Nenhum personagem cadastrado.");
        return;
    }

    println!(
        "{:<8} {:<24} {:<20} {:<12} {:<10} {}",
        "ID", "Nome", "Franquia", "Papel", "Status", "Imagem"
    );
    println!("{}", "-".repeat(100));
    for c in characters {
        let franchise = page
            .franchise_name(c.franchise_id.as_ref())
            .map(str::to_string)
            .or_else(|| c.franchise_names.first().cloned())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} {:<24} {:<20} {:<12} {:<10} {}",
            truncate(c.id.as_str(), 8),
            truncate(&c.name, 24),
            truncate(&franchise, 20),
            c.role_label(),
            c.alive_status.label(),
            images.display_url(c.image_url1.as_deref())
        );
    }
}

fn print_character_detail(c: &Character, images: &ImagePolicy) {
    println!("{} (#{})", c.name, c.id);
    println!("  Descrição:  {}", c.description);
    println!("  Emojis:     {}", c.emojis.join(" "));
    println!("  Gênero:     {}", c.gender.label());
    println!("  Raça:       {}", c.race.join(", "));
    println!("  Etnia:      {}", c.ethnicity.join(", "));
    println!("  Cabelo:     {}", c.hair);
    println!("  Status:     {}", c.alive_status.label());
    println!("  Papel:      {}", c.role_label());
    println!("  Franquias:  {}", c.franchise_names.join(", "));
    println!("  Imagem 1:   {}", images.display_url(c.image_url1.as_deref()));
    println!("  Imagem 2:   {}", images.display_url(c.image_url2.as_deref()));
}

fn print_game_modes(modes: &[GameMode]) {
    if modes.is_empty() {
        println!("Nenhum modo de jogo cadastrado.");
        return;
    }

    for m in modes {
        let tag = m.tag().map(|t| t.label()).unwrap_or("-");
        println!("{} [{}] #{} ({})", m.name, m.status_label(), m.id, tag);
        if !m.description.is_empty() {
            println!("  {}", m.description);
        }
        if let Some(when) = m.scheduled_for {
            println!("  Agendado para {}", when.format("%d/%m/%Y %H:%M"));
        }
    }
}

fn print_users(users: &[User]) {
    println!(
        "{:<8} {:<32} {:<8} {:<10} {}",
        "ID", "Email", "Papel", "Status", "Último acesso"
    );
    println!("{}", "-".repeat(80));
    for u in users {
        let last = u
            .last_access
            .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} {:<32} {:<8} {:<10} {}",
            truncate(u.id.as_str(), 8),
            truncate(&u.email, 32),
            if u.is_admin() { "ADMIN" } else { "USER" },
            if u.is_active() { "ACTIVE" } else { "INACTIVE" },
            last
        );
    }
}

fn print_dashboard(view: &DashboardView) {
    for card in &view.cards {
        println!("{:<22} {}", card.title, card.value);
    }

    for chart in &view.charts {
        println!();
        println!("{}", chart.title);
        let max = chart.max_value().max(1.0);
        for dataset in &chart.datasets {
            println!("  {}", dataset.label);
            for (label, value) in chart.labels.iter().zip(&dataset.data) {
                let width = ((value / max) * 30.0).round() as usize;
                println!("    {:<16} {:>8.2} {}", label, value, "#".repeat(width));
            }
        }
    }

    if !view.top_characters.is_empty() {
        println!();
        println!("Top 5 Personagens por Modo");
        for (mode, top) in &view.top_characters {
            println!("  {}", mode);
            for (rank, entry) in top.iter().enumerate() {
                println!("    {}. {} ({})", rank + 1, entry.character, entry.count);
            }
        }
    }
}
