//! Command handlers.
//!
//! Client failures are reported through the notifier at the point they
//! happen and then returned, so the process can exit non-zero.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Context as _;

use quillpad_core::editor::{BufferInput, DropEvent};
use quillpad_core::ports::{BlogApi, Notice, Notifier, Selection, SessionStore, TextInput};
use quillpad_core::{AdminPanel, ClientError, posts, search, session};
use quillpad_infra::files;

use crate::cli::{Command, DraftArgs};

/// Collaborators shared by every command.
pub struct Context {
    pub api: Arc<dyn BlogApi>,
    pub store: Arc<dyn SessionStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl Context {
    fn fail(&self, title: &str, err: ClientError) -> anyhow::Error {
        self.notifier.notify(Notice::error(title, err.to_string()));
        err.into()
    }

    async fn admin(&self) -> anyhow::Result<AdminPanel<BufferInput>> {
        match AdminPanel::open(
            self.api.clone(),
            self.store.as_ref(),
            self.notifier.clone(),
            BufferInput::new(),
        )
        .await
        {
            Ok(panel) => Ok(panel),
            Err(ClientError::Unauthenticated) => {
                self.notifier.notify(Notice::error(
                    "Not logged in",
                    "run `quillpad login` first",
                ));
                Err(ClientError::Unauthenticated.into())
            }
            Err(e) => Err(self.fail("Admin unavailable", e)),
        }
    }
}

pub async fn run(command: Command, ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::Login { username, password } => login(ctx, &username, &password).await,
        Command::Logout => logout(ctx).await,
        Command::List => list(ctx, out).await,
        Command::Show { id } => show(ctx, id, out).await,
        Command::Search { keyword } => search_posts(ctx, &keyword, out).await,
        Command::New(draft) => save(ctx, None, draft).await,
        Command::Edit { id, draft } => save(ctx, Some(id), draft).await,
        Command::Delete { id, yes } => delete(ctx, id, yes, &mut std::io::stdin().lock()).await,
    }
}

async fn login(ctx: &Context, username: &str, password: &str) -> anyhow::Result<()> {
    match session::login(ctx.api.as_ref(), ctx.store.as_ref(), username, password).await {
        Ok((_, message)) => {
            ctx.notifier
                .notify(Notice::success("Logged in", message.unwrap_or_default()));
            Ok(())
        }
        Err(e) => Err(ctx.fail("Login failed", e)),
    }
}

async fn logout(ctx: &Context) -> anyhow::Result<()> {
    session::logout(ctx.store.as_ref())
        .await
        .map_err(|e| ctx.fail("Logout failed", e))?;
    ctx.notifier.notify(Notice::success("Logged out", ""));
    Ok(())
}

async fn list(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    let posts = posts::list(ctx.api.as_ref())
        .await
        .map_err(|e| ctx.fail("Load failed", e))?;

    if posts.is_empty() {
        writeln!(out, "No posts yet")?;
    }
    for post in &posts {
        writeln!(out, "#{:<5} {}  {}", post.id, post.date, post.title)?;
        writeln!(out, "       {}", post.preview().replace('\n', " "))?;
    }
    Ok(())
}

async fn show(ctx: &Context, id: i64, out: &mut dyn Write) -> anyhow::Result<()> {
    let post = posts::find(ctx.api.as_ref(), id)
        .await
        .map_err(|e| ctx.fail("Load failed", e))?;

    match post {
        Some(post) => {
            writeln!(out, "{}", post.title)?;
            writeln!(out, "{}", post.date)?;
            writeln!(out)?;
            writeln!(out, "{}", post.content)?;
        }
        None => writeln!(out, "Post {id} not found")?,
    }
    Ok(())
}

async fn search_posts(ctx: &Context, keyword: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let found = search::search(ctx.api.as_ref(), keyword)
        .await
        .map_err(|e| ctx.fail("Search failed", e))?;

    for post in &found {
        writeln!(out, "#{:<5} {}  {}", post.id, post.date, post.title)?;
    }
    Ok(())
}

/// Create (`id` is `None`) or edit a post, uploading any images first.
async fn save(ctx: &Context, id: Option<i64>, draft: DraftArgs) -> anyhow::Result<()> {
    let content = match (&draft.content, &draft.content_file) {
        (Some(content), _) => Some(content.clone()),
        (None, Some(path)) => Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading {}", path.display()))?,
        ),
        (None, None) => None,
    };
    let images = files::load_images(&draft.images)
        .await
        .map_err(|e| ctx.fail("Upload failed", e))?;

    let mut panel = ctx.admin().await?;
    match id {
        Some(id) => panel.open_edit(id)?,
        None => panel.open_create(),
    }

    let editor = panel.editor_mut();
    if let Some(title) = draft.title {
        editor.set_title(title);
    }
    if let Some(date) = draft.date {
        editor.set_date(date);
    }
    if let Some(content) = content {
        editor.set_content(content);
    }
    if let Some(caret) = draft.caret {
        editor
            .input_mut()
            .set_selection(Selection::collapsed(caret));
    }

    if !images.is_empty() {
        // The draft only lives in this process, so a failed batch loses it.
        if let Err(e) = panel.drop_files(&DropEvent::new(images)).await {
            ctx.notifier.notify(Notice::error(
                "Post not saved",
                format!(
                    "{} image link(s) inserted before the failure were discarded",
                    e.inserted
                ),
            ));
            return Err(ClientError::from(e).into());
        }
    }

    panel.submit_draft().await?;
    Ok(())
}

async fn delete(
    ctx: &Context,
    id: i64,
    yes: bool,
    input: &mut dyn BufRead,
) -> anyhow::Result<()> {
    let mut panel = ctx.admin().await?;
    let title = panel
        .posts()
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.title.clone())
        .unwrap_or_else(|| format!("#{id}"));

    if !yes && !confirm(&format!("Delete post \"{title}\"? [y/N] "), input)? {
        eprintln!("Cancelled");
        return Ok(());
    }

    panel.delete(id).await?;
    Ok(())
}

fn confirm(prompt: &str, input: &mut dyn BufRead) -> anyhow::Result<bool> {
    eprint!("{prompt}");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
