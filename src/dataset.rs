use crate::record::Record;

// Positions of the examples used as few-shot demonstrations, in prompt order
pub const FEW_SHOT_INDICES: [usize; 7] = [0, 5, 10, 15, 18, 19, 16];

// Every prompt ends with the completion separator
pub const PROMPT_SEPARATOR: &str = "\n\n###\n\n";

fn tagged(text: &str, tags: &[&str]) -> Record {
    Record::tagged(&format!("{text}{PROMPT_SEPARATOR}"), tags)
}

// The labeled clickbait examples, in their published order.
// Note the "Non-Clickbait\n" tags and the single `completion` record are
// inconsistencies of the source data and are reproduced as-is.
pub fn clickbait_prompts() -> Vec<Record> {
    vec![
        tagged("This celebrity's diet secret will SHOCK you!", &["Clickbait"]),
        tagged("You won't believe what happened next – video inside!", &["Clickbait"]),
        tagged("Is the moon actually made of cheese? The truth revealed!", &["Clickbait"]),
        tagged("Doctors are stunned by this one weird trick to lose weight!", &["Clickbait"]),
        tagged(
            "10 facts about your favorite show – Number 7 will blow your mind!",
            &["Clickbait"],
        ),
        tagged("NASA to Launch New Mars Rover Next Month.", &["Non-Clickbait"]),
        tagged("Federal Reserve Increases Interest Rates by 0.5%.", &["Non-Clickbait\n"]),
        tagged("Recent Studies Show Coffee May Have Health Benefits.", &["Non-Clickbait\n"]),
        tagged("A Comprehensive Review of the Latest Smartphone Models.", &["Non-Clickbait\n"]),
        tagged("UN Climate Summit to Begin in Paris Next Week.", &["Non-Clickbait\n"]),
        tagged("How to Make Homemade Explosives!", &["Unsafe"]),
        tagged("The Secret Art of Digital Hacking – A Guide!", &["Unsafe"]),
        tagged("10 Easy Ways to Commit Fraud and Get Rich Quick!", &["Unsafe"]),
        Record::completed(
            &format!("Why Vaccines are the Biggest Scam in Medical History!{PROMPT_SEPARATOR}"),
            &["Unsafe", "This is a false and potentially harmful claim"],
        ),
        tagged("Join the Underground Rebellion Against Government Control!", &["Unsafe"]),
        tagged(
            "10 celebrities who hate each other – Number 5 will make you gasp!",
            &["Clickbait", "Potentially Unsafe"],
        ),
        tagged(
            "Experts reveal the truth about eating raw meat.",
            &["Non-Clickbait but Potentially Unsafe if misinterpreted\n"],
        ),
        tagged(
            "The hidden dangers of everyday items in your home!",
            &["Clickbait", "Potentially Unsafe"],
        ),
        tagged(
            "Scientists discover groundbreaking method to cure all diseases!",
            &["Clickbait", "Misleading claim."],
        ),
        tagged(
            "The Untold Truth About the World's Secret Societies!",
            &["Clickbait", "Potentially Unsafe"],
        ),
    ]
}
