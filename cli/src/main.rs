use clap::Parser;
use todo_cli::config::{Cli, Command, Config};
use todo_cli::UreqTransport;
use todo_core::{Outcome, TodoClient, TodoItem, TodoPage, UiEvent, UpdateTodo};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let mut page = TodoPage::new(TodoClient::new(&config.api_url), UreqTransport::new());
    page.ready()?;

    let event = match cli.command {
        Command::List => None,
        Command::Render => {
            println!("{}", page.render_page()?);
            return Ok(());
        }
        Command::Add { title, content } => {
            let form = page.form_mut();
            form.title = title;
            form.content = content;
            Some(UiEvent::Submit)
        }
        Command::Check { id, uncheck } => Some(UiEvent::Toggle {
            id: id.into(),
            checked: !uncheck,
        }),
        Command::Edit { id, title, content } => Some(UiEvent::Edit {
            id: id.into(),
            changes: UpdateTodo {
                title,
                content,
                checked: None,
            },
        }),
        Command::Delete { id } => Some(UiEvent::Delete { id: id.into() }),
    };

    if let Some(event) = event {
        match page.dispatch(event) {
            Outcome::Reloaded => {}
            Outcome::Stale => warn!("request failed, list not reloaded"),
            Outcome::Ignored => warn!("no item with that id is on the page"),
        }
    }

    print_rows(page.items());
    Ok(())
}

fn print_rows(items: &[TodoItem]) {
    for item in items {
        let mark = if item.checked { 'x' } else { ' ' };
        println!("[{mark}] {} - {} ({})", item.title, item.content, item.id);
    }
}
