//! Build the singlet-adapted pool for H2 in a minimal basis and print it
//!
//! Run with `RUST_LOG=debug` to see the generation summaries.

use adaptq_core::Options;
use adaptq_pool::{OperatorPool, ServiceRegistry};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("adaptq_pool=info".parse()?),
        )
        .init();

    let registry = ServiceRegistry::with_defaults();
    let mut pool = registry.pool("singlet-adapted-uccsd")?;

    let options = Options::from_json(r#"{"n-electrons": 2}"#)?;
    if !pool.optional_parameters(&options) {
        return Err("pool rejected its options".into());
    }

    let n_qubits = 4;
    let size = pool.generate(n_qubits)?.len();

    println!("{} pool on {} qubits", pool.name(), n_qubits);
    println!("=================================");
    for index in 0..size {
        println!(
            "[{}] norm {:.6}: {}",
            index,
            pool.get_normalization_constant(index)?,
            pool.operator_string(index)?
        );
    }

    let fragment = pool.get_operator_instructions(size - 1, 0)?;
    println!();
    println!("exp(x0 * pool[{}]):", size - 1);
    print!("{}", fragment);

    let bound = fragment.bind(&[0.1])?;
    println!("bound with x0 = 0.1: {} gates", bound.len());

    Ok(())
}
