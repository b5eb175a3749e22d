use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use tailor_core::{update, AppState, AppViewModel, Msg};
use tailor_logging::{tailor_debug, tailor_info};

use super::clipboard::CommandClipboard;
use super::config::{config_path, load_config};
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::render;

/// Everything the main loop reacts to, funnelled through one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Line(String),
    Msg(Msg),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let path = config_path();
    let config = load_config(&path).with_context(|| format!("loading {}", path.display()))?;
    logging::initialize(config.log_destination, config.log_level);
    tailor_info!("ATS Tailor dashboard starting with {:?}", config);

    let (tx, rx) = mpsc::channel::<HostEvent>();
    let clipboard = Arc::new(CommandClipboard::new(&config.clipboard_command));
    let mut host = Host {
        state: AppState::new(),
        effects: EffectRunner::new(tx.clone(), config.tick_interval(), clipboard),
    };

    spawn_stdin_reader(tx);

    print_view(&host.state.view());
    prompt();
    while let Ok(event) = rx.recv() {
        match event {
            HostEvent::Line(line) => {
                let view = host.state.view();
                match parse_command(&line, &view) {
                    Ok(Command::Dispatch(msgs)) => {
                        for msg in msgs {
                            host.dispatch(msg);
                        }
                    }
                    Ok(Command::Redraw) => print_view(&view),
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Quit) => break,
                    Err(err) => println!("{err}"),
                }
                prompt();
            }
            HostEvent::Msg(msg) => host.dispatch(msg),
            HostEvent::InputClosed => break,
        }
    }

    host.effects.shutdown();
    tailor_info!("ATS Tailor dashboard exiting");
    Ok(())
}

struct Host {
    state: AppState,
    effects: EffectRunner,
}

impl Host {
    fn dispatch(&mut self, msg: Msg) {
        // Profile edits may carry the password in clear text.
        if !matches!(msg, Msg::ProfileFieldChanged { .. }) {
            tailor_debug!("dispatch {:?}", msg);
        }
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = was_dirty.then(|| state.view());
        self.state = state;

        self.effects.enqueue(effects);
        if let Some(view) = view {
            print_view(&view);
        }
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(HostEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(HostEvent::InputClosed);
    });
}

fn print_view(view: &AppViewModel) {
    println!("\n{}", render(view));
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
