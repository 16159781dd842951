//! `growthctl fib` and `growthctl spiral`

use anyhow::{bail, Result};
use growth_analytics::golden::{fibonacci, fibonacci_sequence, GoldenSpiral};

/// Largest index computed with the recursive variant
const MAX_RECURSIVE_INDEX: u32 = 35;

/// F(93) is the last term that fits in a u64
const MAX_FIB_INDEX: u32 = 93;

pub fn fib(n: u32, sequence: bool) -> Result<()> {
    if sequence && n > MAX_FIB_INDEX + 1 {
        bail!("Sequence length {} too large (max {})", n, MAX_FIB_INDEX + 1);
    }
    if !sequence && n > MAX_FIB_INDEX {
        bail!("Fibonacci index {} too large (max {})", n, MAX_FIB_INDEX);
    }

    if sequence {
        let values: Vec<String> =
            fibonacci_sequence(n as usize).iter().map(u64::to_string).collect();
        println!("{}", values.join(", "));
    } else if n <= MAX_RECURSIVE_INDEX {
        println!("{}", fibonacci(n));
    } else {
        // recursive form is exponential; take the term from the sequence
        let values = fibonacci_sequence(n as usize + 1);
        println!("{}", values[n as usize]);
    }
    Ok(())
}

pub fn spiral(steps: usize, json: bool) -> Result<()> {
    let spiral = GoldenSpiral::new(steps);
    if json {
        let points: Vec<_> = spiral.collect();
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    for (i, point) in spiral.enumerate() {
        println!("{:>4}  x={:>9.3}  y={:>9.3}  r={:.3}", i, point.x, point.y, point.radius);
    }
    Ok(())
}
