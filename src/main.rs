//! Interactive trainer: collect labeled examples, train, then query the
//! network and correct or confirm each answer.
//!
//! Run with:
//!   cargo run --release -- --inputs 2 --hidden 2 --outputs 1
//! Any size left off the command line is asked for on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use backprop_coach::console::{classify, Answer, Prompter};
use backprop_coach::{logging, Example, Network, Session, Topology, TrainConfig, TrainReport};

const MIN_INPUTS: usize = 2;
const MIN_HIDDEN: usize = 2;
const MIN_OUTPUTS: usize = 1;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of input parameters (2 or more)
    #[arg(long, value_name = "INT")]
    inputs: Option<usize>,
    /// Neurons in the hidden layer (2 or more)
    #[arg(long, value_name = "INT")]
    hidden: Option<usize>,
    /// Number of output parameters (1 or more)
    #[arg(long, value_name = "INT")]
    outputs: Option<usize>,
    /// Labeled examples to collect before the first training run
    #[arg(long, value_name = "INT", default_value_t = 4)]
    bootstrap: usize,
    /// JSON file with training hyperparameters
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_name = "FLOAT")]
    learning_rate: Option<f64>,
    #[arg(long, value_name = "INT")]
    max_epoch: Option<usize>,
    #[arg(long, value_name = "FLOAT")]
    tolerance: Option<f64>,
    /// Log training progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::install_logger(cli.verbose)?;

    ensure!(cli.bootstrap >= 1, "--bootstrap must be at least 1");
    let config = load_config(&cli)?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run(&cli, config, &mut prompter)
}

/// Defaults, then the JSON file, then individual flags.
fn load_config(cli: &Cli) -> Result<TrainConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let path = path.to_str().context("config path is not valid UTF-8")?;
            TrainConfig::load_json(path).with_context(|| format!("reading config {path}"))?
        }
        None => TrainConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(lr) = cli.learning_rate {
        config.learning_rate = lr;
    }
    if let Some(max_epoch) = cli.max_epoch {
        config.max_epoch = max_epoch;
    }
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    config.validate()?;
    Ok(config)
}

fn run<R: BufRead, W: Write>(cli: &Cli, config: TrainConfig, p: &mut Prompter<R, W>) -> Result<()> {
    p.say("We're going to create an artificial Neural Network!")?;
    p.say("The network will use back propagation to train itself.")?;
    p.underline()?;
    p.blank(2)?;

    let sizes = [
        (cli.inputs, "How many input parameters will there be? (2 or more)", "Input Parameters:", MIN_INPUTS),
        (cli.hidden, "How many neurons in the hidden layer? (2 or more)", "Neurons:", MIN_HIDDEN),
        (cli.outputs, "How many output parameters will there be? (1 or more)", "Output Parameters:", MIN_OUTPUTS),
    ];
    let mut resolved = [0usize; 3];
    for (slot, (flag, question, label, min)) in resolved.iter_mut().zip(sizes) {
        *slot = match flag {
            Some(n) => {
                ensure!(n >= min, "{label} must be at least {min}, got {n}");
                n
            }
            None => {
                p.say(question)?;
                let Some(n) = p.ask_size(label, min)? else { return Ok(()) };
                p.blank(2)?;
                n
            }
        };
    }
    let topology = Topology::new(resolved[0], resolved[1], resolved[2])?;

    p.say("Creating Network...")?;
    let mut session = Session::new(Network::new(topology, config)?);

    p.say("Now, we need some input data.")?;
    p.underline()?;
    p.blank(2)?;

    let mut examples = Vec::with_capacity(cli.bootstrap);
    for i in 1..=cli.bootstrap {
        let Some(inputs) = p.ask_inputs(&format!("Data Set {i}"), topology.input_size())? else { return Ok(()) };
        let Some(expected) = p.ask_expected(
            &format!("Expected Result for Data Set {i}:"),
            topology.output_size(),
        )? else { return Ok(()) };
        examples.push(Example::new(&topology, inputs, expected)?);
        p.blank(2)?;
    }

    p.say("Training...")?;
    p.underline()?;
    let report = session.bootstrap(examples)?;
    report_training(p, &report)?;
    p.underline()?;
    p.say("Training Complete!")?;
    p.blank(1)?;

    p.say("Let's test it!")?;
    p.blank(1)?;

    loop {
        p.underline()?;
        let prompt = format!("Type {} inputs: ", topology.input_size());
        let Some(inputs) = p.ask_inputs(&prompt, topology.input_size())? else { return Ok(()) };
        let outputs = session.predict(&inputs)?;
        p.blank(1)?;
        for output in &outputs {
            p.say(&format!("Output: {output}"))?;
        }
        p.blank(1)?;

        let question = format!("Was the result supposed to be {}? (y/n/exit)", classify(&outputs));
        let report = match p.ask_answer(&question)? {
            None | Some(Answer::Exit) => return Ok(()),
            Some(Answer::Yes) => {
                p.blank(1)?;
                p.say("Neat!")?;
                p.say("Encouraging Network...")?;
                session.reinforce(inputs)?
            }
            Some(Answer::No) => {
                p.blank(1)?;
                let Some(expected) = p.ask_expected("What were the expected results?", topology.output_size())?
                else { return Ok(()) };
                p.blank(1)?;
                p.say("Retraining Network...")?;
                session.correct(inputs, expected)?
            }
        };
        report_training(p, &report)?;
        p.blank(1)?;
    }
}

fn report_training<R: BufRead, W: Write>(p: &mut Prompter<R, W>, report: &TrainReport) -> io::Result<()> {
    if report.converged {
        p.say(&format!("Converged after {} epochs (error {:.6}).", report.epochs, report.final_error))
    } else {
        p.say(&format!(
            "Stopped after {} epochs without converging (error {:.6}).",
            report.epochs, report.final_error
        ))
    }
}
