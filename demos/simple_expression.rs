use log::debug;
use scicalc_rs::ast::EvaluationMode;
use scicalc_rs::Calculator;

fn main() {
    pretty_env_logger::init();

    let mut calculator = Calculator::default();

    let expressions = [
        "2+3*4",
        "sin(30)+2^3",
        "√(16) × 25%",
        "log(1000) - ln(e)",
        "1/0",
        "sin 30",
    ];

    for expression in expressions {
        match calculator.submit(expression) {
            Ok(result) => println!("{} = {}", expression, result),
            Err(err) => {
                debug!("{} failed: {}", expression, err);
                println!("{} -> {}", expression, err.display_text());
            }
        }
    }

    calculator.set_mode(EvaluationMode::Radians);
    println!("[{}] sin(pi/2) = {:?}", calculator.mode(), calculator.preview("sin(pi/2)"));

    println!("History:");
    for entry in calculator.history().all() {
        println!("  #{} {}", entry.sequence, entry);
    }
    if let Some(answer) = calculator.answer() {
        println!("Ans = {}", answer);
    }
}
