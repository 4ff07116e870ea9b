//! btern - CLI Entry Point
//!
//! Commands:
//! - `btern eval <A> <OP> <B>` - Evaluate one operation on two integers
//! - `btern convert <VALUE>` - Convert between decimal and balanced ternary
//! - `btern test` - Run the built-in self-test
//!
//! Without a subcommand, prints a short demo of the arithmetic.

use btern::{add, div, mul, sub, ArithError, DivRem, Ternary};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "btern")]
#[command(version = "0.1.0")]
#[command(about = "A balanced ternary arithmetic calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one operation on two decimal integers
    #[command(allow_negative_numbers = true)]
    Eval {
        /// Left operand (decimal)
        a: i64,
        /// Operation to apply
        #[arg(value_enum)]
        op: Op,
        /// Right operand (decimal)
        b: i64,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert between decimal and balanced ternary
    Convert {
        /// The value to convert: a decimal integer, or a trit string
        /// like '+-0' with --trits
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Treat the value as a trit string instead of decimal
        #[arg(short, long)]
        trits: bool,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in self-test
    Test,
}

/// The four operators the calculator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Op {
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Multiplication
    Mul,
    /// Division with remainder
    Div,
}

impl Op {
    fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Eval { a, op, b, json }) => {
            run_eval(a, op, b, json);
        }
        Some(Commands::Convert { value, trits, json }) => {
            run_convert(&value, trits, json);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("btern v0.1.0");
            println!("A balanced ternary arithmetic calculator");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_arithmetic();
        }
    }
}

/// One evaluated operation: a single value, or a quotient/remainder
/// pair for div.
enum Evaluated {
    Single(Ternary),
    Pair(DivRem),
}

fn evaluate(op: Op, lhs: &Ternary, rhs: &Ternary) -> Result<Evaluated, ArithError> {
    Ok(match op {
        Op::Add => Evaluated::Single(add(lhs, rhs)),
        Op::Sub => Evaluated::Single(sub(lhs, rhs)),
        Op::Mul => Evaluated::Single(mul(lhs, rhs)),
        Op::Div => Evaluated::Pair(div(lhs, rhs)?),
    })
}

fn render(result: &Evaluated) -> String {
    match result {
        Evaluated::Single(value) => value.pretty(),
        Evaluated::Pair(pair) => {
            format!("{}, {}", pair.quotient.pretty(), pair.remainder.pretty())
        }
    }
}

fn run_eval(a: i64, op: Op, b: i64, json: bool) {
    let lhs = Ternary::from_i64(a);
    let rhs = Ternary::from_i64(b);

    let result = match evaluate(op, &lhs, &rhs) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if json {
        let value = match &result {
            Evaluated::Single(value) => serde_json::json!({
                "lhs": lhs,
                "lhs_value": lhs.to_i64(),
                "op": op.name(),
                "rhs": rhs,
                "rhs_value": rhs.to_i64(),
                "result": value,
                "result_value": value.to_i64(),
            }),
            Evaluated::Pair(pair) => serde_json::json!({
                "lhs": lhs,
                "lhs_value": lhs.to_i64(),
                "op": op.name(),
                "rhs": rhs,
                "rhs_value": rhs.to_i64(),
                "quotient": pair.quotient,
                "quotient_value": pair.quotient.to_i64(),
                "remainder": pair.remainder,
                "remainder_value": pair.remainder.to_i64(),
            }),
        };
        print_json(value);
    } else {
        println!("{} {} {} = {}", lhs.pretty(), op.name(), rhs.pretty(), render(&result));
    }
}

fn run_convert(value: &str, trits: bool, json: bool) {
    let number = if trits {
        match value.parse::<Ternary>() {
            Ok(number) => number,
            Err(e) => {
                eprintln!("❌ Invalid trit string: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match value.parse::<i64>() {
            Ok(n) => Ternary::from_i64(n),
            Err(_) => {
                eprintln!("❌ Invalid decimal integer: {} (did you mean --trits?)", value);
                std::process::exit(1);
            }
        }
    };

    if json {
        print_json(serde_json::json!({
            "trits": number,
            "value": number.to_i64(),
        }));
    } else {
        println!("{}", number.pretty());
    }
}

fn print_json(value: serde_json::Value) {
    match serde_json::to_string_pretty(&value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("❌ Failed to encode JSON: {}", e);
            std::process::exit(1);
        }
    }
}

fn demo_arithmetic() {
    println!("━━━ Balanced Ternary Demo ━━━");
    println!();
    println!("Digits: - = -1, 0 = 0, + = +1, most significant first");
    println!();

    demo_line(5, Op::Add, 6);
    demo_line(8, Op::Sub, -13);
    demo_line(-4, Op::Mul, 5);
    demo_line(1337, Op::Div, 42);
}

fn demo_line(a: i64, op: Op, b: i64) {
    let lhs = Ternary::from_i64(a);
    let rhs = Ternary::from_i64(b);
    match evaluate(op, &lhs, &rhs) {
        Ok(result) => {
            println!("{} {} {} = {}", lhs.pretty(), op.name(), rhs.pretty(), render(&result));
        }
        Err(e) => {
            println!("{} {} {} = ❌ {}", lhs.pretty(), op.name(), rhs.pretty(), e);
        }
    }
}

fn run_self_test() {
    use btern::Trit;

    println!("━━━ btern Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: Trit negation involution
    print!("Trit negation involution... ");
    let mut ok = true;
    for t in Trit::ALL {
        if t.neg().neg() != t {
            ok = false;
            break;
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 2: Conversion roundtrip
    print!("Conversion roundtrip... ");
    ok = true;
    for val in [-9841, -1000, -42, -1, 0, 1, 42, 1000, 9841] {
        if Ternary::from_i64(val).to_i64() != val {
            ok = false;
            break;
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 3: Canonical zero
    print!("Canonical zero... ");
    if Ternary::from_i64(0).to_string() == "0" {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 4: Additive inverse
    print!("Additive inverse (a + -a = 0)... ");
    ok = true;
    for val in [-1000i64, -1, 0, 1, 1000] {
        let a = Ternary::from_i64(val);
        if !add(&a, &a.neg()).is_zero() {
            ok = false;
            break;
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 5: Multiplication correctness
    print!("Multiplication correctness... ");
    let prod = mul(&Ternary::from_i64(123), &Ternary::from_i64(456));
    if prod.to_i64() == 56088 {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (got {}, expected 56088)", prod.to_i64());
        failed += 1;
    }

    // Test 6: Division invariant
    print!("Division invariant (1337 / 42)... ");
    match div(&Ternary::from_i64(1337), &Ternary::from_i64(42)) {
        Ok(result) => {
            let quot = result.quotient.to_i64();
            let rem = result.remainder.to_i64();
            if quot == 31 && rem == 35 && quot * 42 + rem == 1337 {
                println!("✓");
                passed += 1;
            } else {
                println!("✗ (got {} rem {})", quot, rem);
                failed += 1;
            }
        }
        Err(e) => {
            println!("✗ ({})", e);
            failed += 1;
        }
    }

    // Test 7: Division by zero is rejected
    print!("Division by zero rejected... ");
    if div(&Ternary::from_i64(5), &Ternary::zero()).is_err() {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
