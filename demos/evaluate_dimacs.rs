extern crate itertools;
extern crate threesat;

use itertools::Itertools;
use rand::{rngs::StdRng, SeedableRng};
use std::{env, process};
use threesat::{dimacs, solver, Instance, SatError};

use thiserror::Error;

// Exhaustive search doubles in cost with every variable; skip it beyond this.
const EXHAUSTIVE_LIMIT: usize = 24;

#[derive(Error, Debug)]
enum Error {
    #[error("failed to parse input")]
    ParsingError(#[from] dimacs::DimacsError),
    #[error("solver failed")]
    SolverError(#[from] SatError),
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (filepath, seed) = match args.len() {
        2 => (&args[1], 0),
        3 => match args[2].parse::<u64>() {
            Ok(seed) => (&args[1], seed),
            Err(_) => usage(),
        },
        _ => usage(),
    };
    match run(filepath, seed) {
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("execution failed");
            process::exit(-1);
        }
        Ok(()) => (),
    }
}

fn usage() -> ! {
    eprintln!("evaluate_dimacs [path to problem file] [seed]");
    process::exit(-1);
}

fn run(filepath: &str, seed: u64) -> Result<(), Error> {
    let mut instance = dimacs::parse(filepath)?;
    let mut rng = StdRng::seed_from_u64(seed);

    eprintln!(
        "evaluating {} variables, {} clauses",
        instance.num_variables(),
        instance.num_clauses()
    );
    let start = instance.snapshot();

    let greedy = solver::greedy_assign(&mut instance)?;
    println!("greedy\t{:.4}", 1.0 - greedy);

    instance.restore(start.clone())?;
    let outcome = solver::Grasp::default().search(&mut instance, &mut rng)?;
    println!("grasp\t{:.4}", 1.0 - outcome.best_ratio);

    if instance.num_variables() <= EXHAUSTIVE_LIMIT {
        instance.restore(start)?;
        report_exhaustive(&mut instance);
    } else {
        eprintln!("skipping exhaustive search");
    }
    Ok(())
}

fn report_exhaustive(instance: &mut Instance) {
    if solver::exists(instance) {
        println!("s SATISFIABLE");
        let solution = instance.assignment().as_literals().iter().join(" ");
        println!("v {} 0", solution);
    } else {
        println!("s UNSATISFIABLE");
    }
}
