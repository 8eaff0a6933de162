//! Subcommand handlers.

use super::chat;
use super::output::Output;
use super::{Cli, Commands, CredentialArgs};
use crate::client::HttpGateway;
use crate::config::DocqaConfig;
use crate::store::FileTokenStore;
use crate::{DocqaError, Result};
use docqa_core::{
    AskFlow, AuthForm, AuthMode, Document, GuardState, Navigation, OpState, Route, RouteGuard,
    Session, UploadFlow,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a command needs: resolved config, session, gateway and output.
pub struct Context {
    pub config: DocqaConfig,
    pub session: Session,
    pub gateway: HttpGateway,
    pub out: Output,
    token_file: PathBuf,
}

impl Context {
    pub fn new(config: DocqaConfig, out: Output) -> Result<Self> {
        let token_file = config.token_file();
        let session = Session::new(FileTokenStore::new(&token_file));
        let gateway = HttpGateway::from_config(&config, session.clone())?;
        Ok(Self {
            config,
            session,
            gateway,
            out,
            token_file,
        })
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.session.clone())
    }

    /// Run the route guard against `/`.
    pub fn require_session(&self) -> Result<()> {
        match self.guard().check(Route::Home) {
            Navigation::Render(_) => Ok(()),
            Navigation::Redirect(to) => {
                debug!(redirect = %to, "Guarded command without a session");
                Err(DocqaError::NotLoggedIn)
            }
        }
    }
}

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli, config: DocqaConfig) -> Result<()> {
    let ctx = Context::new(config, cli.output())?;

    if cli.verbose {
        ctx.out.kv("API", &ctx.config.api.base_url);
        ctx.out.kv("Token file", &ctx.token_file.display().to_string());
    }

    match cli.command {
        Commands::Signup(args) => authenticate(&ctx, AuthMode::Signup, args).await,
        Commands::Login(args) => authenticate(&ctx, AuthMode::Login, args).await,
        Commands::Logout => logout(&ctx),
        Commands::Status => status(&ctx),
        Commands::Upload { file } => {
            ctx.require_session()?;
            upload(&ctx, &mut UploadFlow::new(), &file).await
        }
        Commands::Ask { question } => {
            ctx.require_session()?;
            ask(&ctx, &mut AskFlow::new(), question.join(" ")).await
        }
        Commands::Chat => {
            ctx.require_session()?;
            chat::run(&ctx).await
        }
    }
}

fn prompt_credentials(args: CredentialArgs) -> Result<(String, String)> {
    let email = match args.email {
        Some(email) => email,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| DocqaError::Input(e.to_string()))?,
    };
    let password = match args.password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| DocqaError::Input(e.to_string()))?,
    };
    Ok((email, password))
}

async fn authenticate(ctx: &Context, mode: AuthMode, args: CredentialArgs) -> Result<()> {
    let (email, password) = prompt_credentials(args)?;
    let mut form = AuthForm::new(mode).with_credentials(email, password);

    match form.submit(&ctx.gateway, &ctx.session).await {
        OpState::Succeeded(success) => {
            ctx.out.success(success.message);
            // The web client navigates after a short delay; here we point at the
            // next command instead.
            match success.redirect.to {
                Route::Login => {
                    ctx.out.hint("Log in with your new account:");
                    ctx.out.command("docqa login");
                }
                _ => {
                    ctx.out.hint("Upload a PDF to start asking questions:");
                    ctx.out.command("docqa upload <file.pdf>");
                }
            }
            Ok(())
        }
        OpState::Failed(err) => Err(err.clone().into()),
        OpState::Idle | OpState::InFlight => Ok(()),
    }
}

fn logout(ctx: &Context) -> Result<()> {
    let was_logged_in = ctx.session.is_authenticated();
    ctx.session.sign_out().map_err(docqa_core::FlowError::from)?;
    if was_logged_in {
        ctx.out.success("Logged out");
    } else {
        ctx.out.info("No active session");
    }
    Ok(())
}

fn status(ctx: &Context) -> Result<()> {
    ctx.out.header("DocQA");
    ctx.out.kv("API", &ctx.config.api.base_url);
    ctx.out.kv("Token file", &ctx.token_file.display().to_string());
    let state = match ctx.guard().state() {
        GuardState::Open => "logged in",
        GuardState::Gated => "logged out",
    };
    ctx.out.kv("Session", state);
    ctx.out.newline();
    Ok(())
}

/// Read a file into a [`Document`] named after its file name.
pub fn read_document(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());
    Ok(Document::new(name, bytes))
}

/// Upload `path` through `flow`, printing the outcome.
pub async fn upload(ctx: &Context, flow: &mut UploadFlow, path: &Path) -> Result<()> {
    let document = read_document(path)?;
    if !document.looks_like_pdf() {
        ctx.out
            .warning(&format!("{} does not look like a PDF", path.display()));
    }
    flow.select(document);
    ctx.out.info("Uploading...");

    match flow.submit(&ctx.gateway).await {
        OpState::Succeeded(message) => {
            ctx.out.success(message);
            Ok(())
        }
        OpState::Failed(err) => Err(err.clone().into()),
        OpState::Idle | OpState::InFlight => Ok(()),
    }
}

/// Ask `question` through `flow`, printing the answer.
pub async fn ask(ctx: &Context, flow: &mut AskFlow, question: String) -> Result<()> {
    match flow.ask(&ctx.gateway, question).await {
        OpState::Succeeded(answer) => {
            ctx.out.answer(answer);
            Ok(())
        }
        OpState::Failed(err) => Err(err.clone().into()),
        OpState::Idle | OpState::InFlight => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> Context {
        let config = DocqaConfig::default()
            .with_overrides(None, Some(dir.path().join("token")));
        Context::new(config, Output::no_color()).unwrap()
    }

    #[test]
    fn test_require_session_follows_token_file() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        assert!(matches!(ctx.require_session(), Err(DocqaError::NotLoggedIn)));

        ctx.session.sign_in("T").unwrap();
        assert!(ctx.require_session().is_ok());

        logout(&ctx).unwrap();
        assert!(matches!(ctx.require_session(), Err(DocqaError::NotLoggedIn)));
    }

    #[test]
    fn test_read_document_uses_file_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.file_name, "paper.pdf");
        assert!(doc.looks_like_pdf());
    }

    #[test]
    fn test_read_document_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_document(&dir.path().join("missing.pdf")).unwrap_err();
        assert!(matches!(err, DocqaError::Io(_)));
    }
}
