use std::collections::{HashMap, HashSet};

use topicscan_core::traits::FunctionWords;
use topicscan_core::types::Locale;

const ENGLISH: &[&str] = &[
	"a","an","and","are","as","at","be","by","for","from","has","he","in","is","it","its","of","on","that","the","to","was","will","with","or","but","not","this","these","they","them","their","there","then","than","so","if","when","where","why","how","what","which","who","whom","whose","can","could","should","would","may","might","must","shall","do","does","did","have","had","having",
	"i","you","she","we","me","him","her","us","my","your","our","his","into","onto","over","under","about","after","before","up","down","out","off","very","too","just","all","any","some","no","nor","been","being","were","am",
];

const GERMAN: &[&str] = &[
	"der","die","das","den","dem","des","ein","eine","einen","einem","einer","eines","und","oder","aber","in","im","an","am","auf","aus","bei","mit","nach","von","vom","zu","zum","zur","für","über","unter","ist","sind","war","wird","werden","nicht","auch","als","wie","es","er","sie","wir","ihr","ich","du","sich","dass","so","wenn",
];

const FRENCH: &[&str] = &[
	"le","la","les","l","un","une","des","du","de","d","et","ou","mais","à","au","aux","en","dans","sur","sous","par","pour","avec","sans","est","sont","ce","cette","ces","il","elle","ils","elles","nous","vous","je","tu","qui","que","qu","ne","pas","se","son","sa","ses",
];

const SPANISH: &[&str] = &[
	"el","la","los","las","un","una","unos","unas","y","o","pero","a","al","de","del","en","con","sin","por","para","sobre","es","son","está","están","que","se","su","sus","lo","le","les","no","como","mi","tu",
];

const DUTCH: &[&str] = &[
	"de","het","een","en","of","maar","in","op","aan","bij","met","naar","van","voor","over","onder","uit","is","zijn","was","wordt","worden","niet","ook","als","dat","die","dit","er","hij","zij","wij","ik","je","u","zich","te",
];

/// Function-word lists keyed by language subtag.
pub struct FunctionWordLists {
	lists: HashMap<&'static str, HashSet<&'static str>>,
}

impl Default for FunctionWordLists {
	fn default() -> Self {
		let mut lists = HashMap::new();
		for (language, words) in [("en", ENGLISH), ("de", GERMAN), ("fr", FRENCH), ("es", SPANISH), ("nl", DUTCH)] {
			lists.insert(language, words.iter().copied().collect());
		}
		Self { lists }
	}
}

impl FunctionWordLists {
	pub fn new() -> Self { Self::default() }

	/// No lists at all; every locale falls back to strict matching.
	pub fn none() -> Self { Self { lists: HashMap::new() } }
}

impl FunctionWords for FunctionWordLists {
	fn has_function_words(&self, locale: &Locale) -> bool { self.lists.contains_key(locale.language()) }

	fn is_function_word(&self, word: &str, locale: &Locale) -> bool {
		self.lists.get(locale.language()).is_some_and(|list| list.contains(word))
	}
}
