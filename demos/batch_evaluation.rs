use scicalc_rs::ast::EvaluationMode;
use scicalc_rs::evaluate_batch;

fn main() {
    pretty_env_logger::init();

    let expressions: Vec<String> = (0..=12).map(|i| format!("sin({})", i * 30)).collect();

    let results = evaluate_batch(expressions.as_slice(), EvaluationMode::Degrees);
    for (expression, result) in expressions.iter().zip(results) {
        match result {
            Ok(value) => println!("{} = {}", expression, value),
            Err(err) => println!("{}: {}", expression, err),
        }
    }
}
