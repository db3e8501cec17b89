use std::env;
use std::error::Error;

use linklab::RandomListBuilder;

/// Prints a random list and its summary statistics.
///
/// Usage: `random_list [SIZE] [SEED]`
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut builder = RandomListBuilder::new();
    if let Some(size) = args.next() {
        builder = builder.size(size.parse()?);
    }
    if let Some(seed) = args.next() {
        builder = builder.seed(seed.parse()?);
    }

    let list = builder.build()?;
    println!("{}", list);
    println!("length:  {}", list.len());
    println!("sum:     {}", list.get_sum());
    if list.is_empty() {
        return Ok(());
    }
    println!("min:     {}", list.get_min()?);
    println!("max:     {}", list.get_max()?);
    println!("average: {:.2}", list.get_average()?);
    if let Some(middle) = list.get_middle().and_then(|id| list.node(id)) {
        println!("middle:  {}", middle.value());
    }

    let mut reversed = list.clone();
    reversed.reverse();
    println!("reversed: {}", reversed);
    Ok(())
}
