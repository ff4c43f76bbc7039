mod naive_bayes;

pub use self::naive_bayes::MultinomialNaiveBayes;
