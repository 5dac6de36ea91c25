use sentiment_classifiers::preprocessing::{
    count_hashtags, count_mentions, default_stop_words, normalize_hashtag, top_keywords,
    LocationMapper, TextCleaner, ENGLISH_STOP_WORDS,
};

#[test]
fn clean_expands_contractions_and_drops_markup() {
    let cleaner = TextCleaner::default();
    assert_eq!(
        cleaner.clean("Can't WAIT!!! <br>#SoHappy @nurse www.example.com"),
        "ca not wait sohappy"
    );
    assert_eq!(
        cleaner.tokens("Second dose: 100% done"),
        vec!["second", "dose", "done"]
    );
}

#[test]
fn hashtag_and_mention_counts() {
    let post = "#Pfizer jab done, thanks @nhs and @gp #grateful #science";
    assert_eq!(count_hashtags(post), 3);
    assert_eq!(count_mentions(post), 2);
    assert_eq!(count_hashtags("no tags here"), 0);
}

#[test]
fn normalize_hashtag_field() {
    assert_eq!(
        normalize_hashtag("['Pfizer', 'CovidVaccine']"),
        "pfizer covidvaccine"
    );
    assert_eq!(normalize_hashtag("  "), "");
}

#[test]
fn top_keywords_orders_by_count_then_first_appearance() {
    let texts = [
        "Vaccine rollout rollout today",
        "today rollout great news",
        "news news",
    ];
    let top = top_keywords(&texts, &default_stop_words(), 3);
    assert_eq!(
        top,
        vec![
            ("rollout".to_string(), 3),
            ("news".to_string(), 3),
            ("today".to_string(), 2),
        ]
    );
}

#[test]
fn top_keywords_skips_short_and_stop_words() {
    let top = top_keywords(&["the cat and the dog were there"], &default_stop_words(), 10);
    assert!(top.is_empty());
}

#[test]
fn top_keywords_drops_the_full_english_stop_list() {
    assert_eq!(ENGLISH_STOP_WORDS.len(), 318);
    let top = top_keywords(
        &["first dose found three things amount whereas moreover becomes"],
        &default_stop_words(),
        10,
    );
    assert_eq!(top, vec![("dose".to_string(), 1), ("things".to_string(), 1)]);
}

#[test]
fn location_mapper_canonicalizes_known_places() {
    let mapper = LocationMapper::default();
    assert_eq!(mapper.map("london, england"), "united kingdom");
    assert_eq!(mapper.map("toronto"), "canada");
    assert_eq!(mapper.map("  mumbai "), "india");
    assert_eq!(mapper.map("atlantis"), "atlantis");
}

#[test]
fn location_mapper_ignores_single_character_keys() {
    let mapper = LocationMapper::new(vec![
        ("x".to_string(), "nowhere".to_string()),
        ("oslo".to_string(), "norway".to_string()),
    ]);
    assert_eq!(mapper.map("xanadu"), "xanadu");
    assert_eq!(mapper.map("oslo"), "norway");
}
