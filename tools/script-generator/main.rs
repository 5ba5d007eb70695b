use clap::Parser;
use formdef::prelude::*;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fs;

const LABELS: [&str; 8] = [
    "Name", "Email", "Country", "Newsletter", "Company", "Role", "Size", "Terms",
];
const VALUES: [&str; 8] = [
    "Red", "Green", "Blue", "Small", "Medium", "Large", "Yes", "No",
];

/// A CLI tool to generate random action scripts for the formdef store
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_script.json")]
    output: String,

    /// The minimum number of fields to add
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of fields to add
    #[arg(long, default_value_t = 8)]
    max: usize,

    /// The maximum number of options per select field
    #[arg(long, default_value_t = 5)]
    max_options: usize,

    /// Probability that a field gets the required rule
    #[arg(long, default_value_t = 0.4)]
    required_ratio: f64,
}

/// Mirrors the ids a `SequentialIds` generator hands out while the script replays.
#[derive(Default)]
struct IdTracker {
    fields: u64,
    options: u64,
}

impl IdTracker {
    fn next_field(&mut self) -> FieldId {
        self.fields += 1;
        FieldId::new(format!("field-{}", self.fields))
    }

    fn next_option(&mut self) -> OptionId {
        self.options += 1;
        OptionId::new(format!("option-{}", self.options))
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.required_ratio) {
        eprintln!("Error: --required-ratio must be between 0 and 1");
        std::process::exit(1);
    }

    let field_count = rng.random_range(cli.min..=cli.max);
    println!("Generating a script with {} field(s)...", field_count);

    let mut ids = IdTracker::default();
    let mut actions = Vec::new();
    let mut created = Vec::new();
    for _ in 0..field_count {
        let id = generate_field(&mut rng, &cli, &mut ids, &mut actions);
        created.push(id);
    }

    // Drop one field now and then to exercise removal.
    if created.len() > 1 && rng.random_bool(0.3) {
        if let Some(id) = created.choose(&mut rng) {
            println!("-> Removing field '{}'.", id);
            actions.push(Action::RemoveField(id.clone()));
        }
    }

    let script = ActionScript::new(actions);
    fs::write(&cli.output, script.to_json()?)?;

    println!(
        "Successfully generated {} actions and saved them to '{}'",
        script.len(),
        cli.output
    );

    Ok(())
}

/// Appends the actions that create and configure one field; returns its id.
fn generate_field(
    rng: &mut ThreadRng,
    cli: &Cli,
    ids: &mut IdTracker,
    actions: &mut Vec<Action>,
) -> FieldId {
    let kind = *FieldKind::ALL.choose(rng).unwrap_or(&FieldKind::Text);
    let id = ids.next_field();
    let label = LABELS.choose(rng).copied().unwrap_or("Field");
    actions.push(Action::AddField(kind));

    match kind {
        FieldKind::Text => {
            let edit = TextFieldEditables {
                label: Some(Some(label.to_string())),
                default_value: rng
                    .random_bool(0.5)
                    .then(|| Some(format!("{} here", label))),
            };
            actions.push(Action::UpdateTextField(Targeted::new(id.clone(), edit)));
        }
        FieldKind::Checkbox => {
            let edit = CheckboxFieldEditables {
                label: Some(Some(label.to_string())),
                default_value: Some(rng.random_bool(0.5)),
            };
            actions.push(Action::UpdateCheckboxField(Targeted::new(id.clone(), edit)));
        }
        FieldKind::Select => {
            let count = rng.random_range(0..=cli.max_options);
            let mut options = Vec::with_capacity(count);
            for _ in 0..count {
                let value = VALUES.choose(rng).copied().unwrap_or("Option");
                options.push((ids.next_option(), value));
                actions.push(Action::AddSelectOption {
                    id: id.clone(),
                    value: value.to_string(),
                });
            }
            let edit = SelectFieldEditables {
                label: Some(Some(label.to_string())),
                default_value: options
                    .choose(rng)
                    .map(|(_, value)| Some(value.to_string())),
                options: None,
            };
            actions.push(Action::UpdateSelectField(Targeted::new(id.clone(), edit)));

            if options.len() > 1 && rng.random_bool(0.25) {
                if let Some((option_id, _)) = options.first() {
                    actions.push(Action::RemoveSelectOption {
                        id: id.clone(),
                        option: OptionRef {
                            id: option_id.clone(),
                        },
                    });
                }
            }
            println!("-> Select '{}' with {} option(s).", id, options.len());
        }
    }

    if rng.random_bool(cli.required_ratio) {
        actions.push(Action::AddValidationRule {
            field_id: id.clone(),
            kind: RuleKind::Required,
        });
    }

    id
}
