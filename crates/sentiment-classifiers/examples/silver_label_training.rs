use std::collections::HashMap;

use anyhow::{Context, Result};
use ndarray::Array2;

use sentiment_classifiers::config::{ModelConfig, ModelType};
use sentiment_classifiers::logging::init_logging;
use sentiment_classifiers::metrics::{accuracy_score, confusion_matrix};
use sentiment_classifiers::models::factory;
use sentiment_classifiers::pipeline::{ProcessedText, SentimentPipeline};

const POSTS: &[&str] = &[
    "Got my first dose today, feeling great and so grateful to the nurses! #thankful",
    "Arm is really sore and I feel awful after the jab",
    "Second shot done. Side effects were mild, happy to be protected",
    "Not happy about the chaos at the vaccination centre, terrible queues",
    "Booked my appointment for next week",
    "The rollout here is amazing, well organised and quick 💪",
    "Headache and fever all night, worst day this month",
    "I don't feel bad at all, no side effects",
    "Reading the latest trial results https://example.org/trial",
    "Scared of needles but it was fine, the staff were kind",
    "Horrible experience, waited four hours and they ran out",
    "Love seeing so many people protected, hopeful for summer",
];

/// Count matrix over stems, vocabulary in first-seen order.
fn bag_of_words(docs: &[ProcessedText]) -> Result<(Array2<f64>, Vec<String>)> {
    let mut vocab: HashMap<String, usize> = HashMap::new();
    let mut terms: Vec<String> = Vec::new();
    for stem in docs.iter().flat_map(|d| d.stems.iter()) {
        if !vocab.contains_key(stem) {
            vocab.insert(stem.clone(), terms.len());
            terms.push(stem.clone());
        }
    }

    let mut x = Array2::<f64>::zeros((docs.len(), terms.len()));
    for (row, doc) in docs.iter().enumerate() {
        for stem in &doc.stems {
            let col = *vocab.get(stem).context("stem missing from vocabulary")?;
            x[(row, col)] += 1.0;
        }
    }
    Ok((x, terms))
}

fn main() -> Result<()> {
    init_logging("info");

    let pipeline = SentimentPipeline::default();
    let docs = pipeline.process_batch(POSTS);
    for (post, doc) in POSTS.iter().zip(docs.iter()) {
        log::info!("{:?} <- {}", doc.silver_label, post);
    }

    let y: Vec<i32> = docs.iter().map(|d| d.silver_label.as_i32()).collect();
    let (x, terms) = bag_of_words(&docs)?;
    log::info!("Vocabulary size: {}", terms.len());

    let configs = [
        ModelConfig::new(
            0.5,
            ModelType::Logistic {
                n_iters: 500,
                lambda: 0.1,
            },
        ),
        ModelConfig::new(0.0, ModelType::MultinomialNb { alpha: 1.0 }),
    ];

    for params in configs {
        let kind = params.model_type.name();
        let mut model = factory::build_model(params)
            .with_context(|| format!("failed to build {} model", kind))?;
        model
            .fit(x.view(), &y)
            .with_context(|| format!("failed to fit {} model", kind))?;

        let pred = model.predict(x.view())?.to_vec();
        let accuracy = accuracy_score(&y, &pred)?;
        let cm = confusion_matrix(&y, &pred)?;

        println!("{} training accuracy: {:.3}", model.name(), accuracy);
        println!("labels: {:?}", cm.labels());
        println!("{}", cm.counts());
    }

    Ok(())
}
