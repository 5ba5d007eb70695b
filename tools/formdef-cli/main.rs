use clap::{Parser, ValueEnum};
use formdef::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// How the final form definition is printed.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Preview,
}

/// Replays form-builder action scripts and prints the resulting definition
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the action script JSON file
    script_path: Option<String>,

    /// Optional path to a JSON object of submitted answers, keyed by field id
    #[arg(short, long)]
    answers: Option<String>,

    /// How to print the resulting form
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Preview)]
    format: OutputFormat,

    /// Treat validation rules as a set: adding an attached rule again is ignored
    #[arg(long)]
    dedupe_rules: bool,

    /// Run in interactive mode to build a form one action at a time
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let store = FormStore::builder()
        .with_id_generator(SequentialIds::new())
        .with_rule_policy(if cli.dedupe_rules {
            RulePolicy::Deduplicate
        } else {
            RulePolicy::Sequence
        })
        .build();

    if cli.human {
        if let Err(e) = run_interactive(store) {
            exit_with_error(&format!("Interactive session failed: {}", e));
        }
    } else {
        run_non_interactive(cli, store);
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli, mut store: FormStore) {
    let script_path = cli.script_path.unwrap_or_else(|| {
        exit_with_error("Script path is required in non-interactive mode.");
    });

    let load_start = Instant::now();
    let script = ActionScript::from_file(&script_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load script '{}': {}", script_path, e))
    });
    let answers = cli.answers.map(|path| {
        load_answers(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load answers from '{}': {}", path, e))
        })
    });
    let load_duration = load_start.elapsed();

    let replay_start = Instant::now();
    store.replay(&script);
    if let Some(answers) = answers {
        store.validate(answers);
    }
    let replay_duration = replay_start.elapsed();

    print_state(store.state(), cli.format);

    let invalid = store
        .fields()
        .iter()
        .filter(|f| !f.result.errors().is_empty())
        .count();
    eprintln!("\n--- Summary ---");
    eprintln!("Actions replayed:     {}", script.len());
    eprintln!("Fields:               {}", store.fields().len());
    eprintln!("Fields with errors:   {}", invalid);
    eprintln!("Script Loading:       {:?}", load_duration);
    eprintln!("Replay:               {:?}", replay_duration);
}

fn load_answers(path: &str) -> Result<Answers> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_state(state: &FormBuilderState, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(state) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with_error(&format!("Failed to serialize form: {}", e)),
        },
        OutputFormat::Preview => {
            println!("{}", FormPreview::from_state(state));
            for field in state.fields() {
                for error in field.result.errors() {
                    println!("  ! {}: {}", field.id(), error.message);
                }
            }
        }
    }
}

const HELP: &str = "\
Commands:
  add <text|select|checkbox>     add a field
  remove <field-id>              remove a field
  label <field-id> [text]        set a field's label (clear it when empty)
  default <field-id> [value]     set a field's default value (clear it when empty)
  option <field-id> <value>      add an option to a select field
  unoption <field-id> <opt-id>   remove an option from a select field
  require <field-id>             attach the required rule
  unrequire <field-id>           detach the required rule
  show | json                    print the form
  help | quit";

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(mut store: FormStore) -> io::Result<()> {
    println!("--- formdef Interactive Mode ---");
    println!("{}", HELP);

    loop {
        let line = prompt_for_input("action")?;
        let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        let (target, argument) = rest.split_once(' ').unwrap_or((rest, ""));
        let id = FieldId::from(target);

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "show" => print_state(store.state(), OutputFormat::Preview),
            "json" => print_state(store.state(), OutputFormat::Json),
            "add" => match target.parse::<FieldKind>() {
                Ok(kind) => println!("Added {} field '{}'", kind, store.add_field(kind)),
                Err(e) => println!("{}", e),
            },
            "remove" => {
                store.remove_field(&id);
            }
            "label" | "default" => edit_field(&mut store, &id, command, argument),
            "option" => match store.add_select_option(&id, argument) {
                Some(option) => println!("Added option '{}'", option),
                None => println!("No select field '{}'", id),
            },
            "unoption" => {
                store.remove_select_option(&id, &OptionId::from(argument));
            }
            "require" => {
                store.add_validation_rule(&id, RuleKind::Required);
            }
            "unrequire" => {
                store.remove_validation_rule(&id, RuleKind::Required);
            }
            other => println!("Unknown command '{}'. Type 'help' for a list.", other),
        }
    }
    Ok(())
}

/// Routes a label or default edit to the update action matching the field's kind.
/// An empty value clears the attribute where the field allows it.
fn edit_field(store: &mut FormStore, id: &FieldId, attribute: &str, value: &str) {
    let Some(kind) = store.state().find(id.as_str()).map(FormField::kind) else {
        println!("No field '{}'", id);
        return;
    };
    let is_label = attribute == "label";
    let clear = value.is_empty();

    match kind {
        FieldKind::Text => {
            let edit = match (is_label, clear) {
                (true, true) => TextFieldEditables::clear_label(),
                (true, false) => TextFieldEditables::label(value),
                (false, true) => TextFieldEditables::clear_default(),
                (false, false) => TextFieldEditables::default_value(value),
            };
            store.update_text_field(id, edit);
        }
        FieldKind::Select => {
            let edit = match (is_label, clear) {
                (true, true) => SelectFieldEditables::clear_label(),
                (true, false) => SelectFieldEditables::label(value),
                (false, true) => SelectFieldEditables::clear_default(),
                (false, false) => SelectFieldEditables::default_value(value),
            };
            store.update_select_field(id, edit);
        }
        FieldKind::Checkbox => {
            let edit = if is_label && clear {
                CheckboxFieldEditables::clear_label()
            } else if is_label {
                CheckboxFieldEditables::label(value)
            } else {
                match value.parse::<bool>() {
                    Ok(checked) => CheckboxFieldEditables::default_value(checked),
                    Err(_) => {
                        println!("Checkbox defaults are 'true' or 'false'");
                        return;
                    }
                }
            };
            store.update_checkbox_field(id, edit);
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str) -> io::Result<String> {
    let mut line = String::new();

    print!("> {}: ", prompt_text);
    io::stdout().flush()?;

    if io::stdin().read_line(&mut line)? == 0 {
        return Ok("quit".to_string());
    }
    Ok(line.trim().to_string())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
