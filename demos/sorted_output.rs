//! Drives both heaps and prints what comes out.
//!
//! ```bash
//! RUST_LOG=trace cargo run --example sorted_output
//! ```

use log::info;
use priority_heaps::binary::BinaryHeap;
use priority_heaps::fibonacci::FibonacciHeap;
use priority_heaps::HeapError;

fn main() -> Result<(), HeapError> {
    env_logger::init();

    let mut queue = BinaryHeap::new();
    for value in [4, 2, 10, -3, 1, 3, 5, -5, 4, -3] {
        queue.push(value);
    }

    let mut ordered = Vec::new();
    loop {
        match queue.pop() {
            Ok(value) => ordered.push(value),
            Err(HeapError::Empty) => break,
            Err(e) => return Err(e),
        }
    }

    let line: Vec<String> = ordered.iter().map(ToString::to_string).collect();
    println!("{}", line.join(" "));

    let mut fib = FibonacciHeap::new();
    let mut ten = None;
    for value in [4, 2, 10, -3, 1, -4] {
        let handle = fib.push(value);
        if value == 10 {
            ten = Some(handle);
        }
    }
    info!("fibonacci heap holds {} values", fib.len());

    println!("peek: {}", fib.peek()?);
    println!("pop: {}", fib.pop()?);
    println!("peek: {}", fib.peek()?);

    if let Some(ten) = ten {
        fib.decrease_key(&ten, -10)?;
        println!("after decreasing 10 to -10, peek: {}", fib.peek()?);
    }

    Ok(())
}
