mod random;

use std::fmt::Debug;
use std::fs;
use std::iter;
use std::ops::Add;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};
use fastrand::Rng;
use lexical_core::FromLexical;
use structopt::StructOpt;

use charconv::FromChars;

use random::RandomGen;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "charconv-simple-bench",
    about = "charconv throughput benchmark utility",
    no_version
)]
struct Opt {
    /// Parse numbers as float32 (default is float64)
    #[structopt(short, long = "32")]
    float32: bool,
    /// How many times to repeat parsing
    #[structopt(short, default_value = "1000")]
    repeat: usize,
    #[structopt(subcommand)]
    command: Cmd,
}

#[derive(Debug, StructOpt)]
enum Cmd {
    /// Read the numbers from file
    File {
        /// Input file (one number per line)
        #[structopt(parse(from_os_str))]
        filename: PathBuf,
    },
    /// Generate random numbers
    Random {
        /// Random generator to be used
        #[structopt(
            default_value = "uniform",
            parse(try_from_str),
            possible_values = RandomGen::variants()
        )]
        gen: RandomGen,
        /// Number of random numbers generated
        #[structopt(short, default_value = "100000")]
        number: usize,
        /// Random generator seed
        #[structopt(short, default_value = "0")]
        seed: u64,
        /// Also save the generated inputs to file
        #[structopt(short = "f", parse(from_os_str))]
        filename: Option<PathBuf>,
    },
}

#[derive(Debug, Clone)]
struct BenchResult {
    pub name: String,
    pub times: Vec<i64>,
}

fn run_one_bench<T, F>(name: &str, inputs: &[String], repeat: usize, func: F) -> BenchResult
where
    T: FromChars + Add<Output = T> + PartialEq + Debug,
    F: Fn(&str) -> T,
{
    let mut times = Vec::with_capacity(repeat);
    let mut dummy = T::default();
    for _ in 0..repeat {
        let t0 = Instant::now();
        for input in inputs {
            dummy = dummy + func(input.as_str());
        }
        times.push(t0.elapsed().as_nanos() as _);
    }
    assert_ne!(dummy, T::default());
    times.sort_unstable();
    BenchResult {
        name: name.into(),
        times,
    }
}

fn run_all_benches<T>(inputs: &[String], repeat: usize) -> Vec<BenchResult>
where
    T: FromChars + FromLexical + FromStr + Add<Output = T> + PartialEq + Debug,
{
    vec![
        run_one_bench("charconv", inputs, repeat, |s| {
            charconv::from_chars::<T, _>(s).value
        }),
        run_one_bench("lexical_core", inputs, repeat, |s| {
            lexical_core::parse_partial::<T>(s.as_bytes())
                .map(|(value, _)| value)
                .unwrap_or_default()
        }),
        run_one_bench("from_str", inputs, repeat, |s| {
            s.parse::<T>().unwrap_or_else(|_| T::default())
        }),
    ]
}

fn print_report(inputs: &[String], results: &[BenchResult], inputs_name: &str, ty: &str) {
    let n = inputs.len();
    let mb = (inputs.iter().map(|s| s.len()).sum::<usize>() as f64) / 1024. / 1024.;

    let width = 76;
    println!("{:=<width$}", "", width = width + 4);
    println!(
        "| {:^width$} |",
        format!("{} ({}, {:.2} MB, {})", inputs_name, n, mb, ty),
        width = width
    );
    println!("|{:=<width$}|", "", width = width + 2);
    let n = n as f64;
    print_table("ns/value", results, width, |t| t / n);
    print_table("Mvalues/s", results, width, |t| 1e3 * n / t);
    print_table("MB/s", results, width, |t| mb * 1e9 / t);
    println!("|{:width$}|", "", width = width + 2);
    println!("{:=<width$}", "", width = width + 4);
}

fn print_table(title: &str, results: &[BenchResult], width: usize, transform: impl Fn(f64) -> f64) {
    let repeat = results[0].times.len();
    let columns = &[
        ("min", 0),
        ("5%", repeat / 20),
        ("25%", repeat / 4),
        ("median", repeat / 2),
        ("75%", (3 * repeat) / 4),
        ("95%", (19 * repeat) / 20),
        ("max", repeat - 1),
    ];
    let w = 9;
    let h = width - 7 * w;

    println!("|{:width$}|", "", width = width + 2);
    print!("| {:<h$}", title, h = h);
    for (name, _) in columns {
        print!("{:>w$}", name, w = w);
    }
    println!(" |");
    println!("|{:-<width$}|", "", width = width + 2);
    for res in results {
        print!("| {:<h$}", res.name, h = h);
        for &(_, idx) in columns {
            print!("{:>w$.2}", transform(res.times[idx] as f64), w = w);
        }
        println!(" |");
    }
}

fn main() -> Result<()> {
    let opt: Opt = StructOpt::from_args();
    let (inputs, inputs_name) = match opt.command {
        Cmd::File { filename } => (
            fs::read_to_string(&filename)
                .with_context(|| format!("cannot read {}", filename.display()))?
                .trim()
                .lines()
                .map(String::from)
                .collect::<Vec<_>>(),
            filename.display().to_string(),
        ),
        Cmd::Random {
            gen,
            number,
            seed,
            filename,
        } => {
            let mut rng = Rng::with_seed(seed);
            let inputs: Vec<String> = iter::repeat_with(|| gen.gen(&mut rng))
                .take(number)
                .collect();
            if let Some(filename) = filename {
                fs::write(&filename, inputs.join("\n"))
                    .with_context(|| format!("cannot write {}", filename.display()))?;
            }
            (inputs, gen.to_string())
        }
    };
    let repeat = opt.repeat.max(1);
    let (results, ty) = if opt.float32 {
        (run_all_benches::<f32>(&inputs, repeat), "f32")
    } else {
        (run_all_benches::<f64>(&inputs, repeat), "f64")
    };
    print_report(&inputs, &results, &inputs_name, ty);
    Ok(())
}
