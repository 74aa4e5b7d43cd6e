use clap::Parser;
use color_print::cformat;
use tinybc::{Emitter, Lexer, Parser as BasicParser};

#[derive(Debug, clap::Parser)]
#[clap(author, version, about)]
struct Args {
    /// Input file
    input: String,

    /// Output file
    #[clap(short, long, default_value = "out.c")]
    output: String,

    /// Print the generated C source
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    let args: Args = Args::parse();
    println!("Tiny BASIC Compiler");

    println!("1. Read and Compile Source");
    println!("  < {}", &args.input);
    let source = std::fs::read_to_string(&args.input)
        .expect(&cformat!("<red,bold>Failed to open file</>: {}", &args.input));

    let lexer = Lexer::new(&source);
    let mut emitter = Emitter::new(&args.output);
    let result = BasicParser::new(lexer, &mut emitter).and_then(|mut parser| parser.program());
    if let Err(err) = result {
        err.print_diag(&args.input, &source);
        std::process::exit(1);
    }

    println!("2. Write C Source");
    println!("  > {}", &args.output);
    emitter.write_file().expect(&cformat!(
        "<red,bold>Failed to write file</>: {}",
        &args.output
    ));

    if args.dump {
        print!("{}", emitter.output());
    }
    println!("Compiling completed.");
}
