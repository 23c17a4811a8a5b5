use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use polars::prelude::*;
use rand::prelude::*;
use rayon::prelude::*;

use super::example::Example;
use super::domain::Domains;
use crate::checkers;
use crate::error::{Result, TreeError};


/// Struct `Sample` holds a batch of categorical examples,
/// the attribute domains, and the name of the class attribute.
///
/// The attributes used for splitting are
/// all the attributes of `Domains` except the class.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) examples: Vec<Example>,
    pub(super) domains: Domains,
    pub(super) class: String,
}


impl Sample {
    /// Construct a new instance of `Sample` from its components.
    /// `domains` should contain the splitting attributes;
    /// the domain of the class attribute is optional.
    pub fn new<S>(examples: Vec<Example>, domains: Domains, class: S) -> Self
        where S: Into<String>
    {
        let class = class.into();
        Self { examples, domains, class }
    }


    /// Construct a new instance of `Sample`
    /// whose domains are inferred from `examples`.
    /// `attributes` lists the columns, in the order
    /// they should be examined, and may contain the class.
    pub fn from_examples<S, T>(
        examples: Vec<Example>,
        attributes: &[S],
        class: T,
    ) -> Self
        where S: AsRef<str>,
              T: Into<String>,
    {
        let domains = Domains::from_examples(attributes, &examples);
        Self::new(examples, domains, class)
    }


    /// Convert `polars::DataFrame` into `Sample`.
    /// Every column is cast to a string column.
    /// A null entry means that the example does not hold the attribute.
    ///
    /// The column named `target` is used for the class label.
    pub fn from_dataframe<S>(data: DataFrame, target: S) -> Result<Self>
        where S: AsRef<str>
    {
        let target = target.as_ref();
        let names = data.get_column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        if !names.iter().any(|name| name == target) {
            return Err(TreeError::UnknownAttribute(target.to_string()));
        }

        let columns = data.get_columns()
            .into_par_iter()
            .map(|series| -> Result<Vec<Option<String>>> {
                let series = series.cast(&DataType::Utf8)?;
                let values = series.utf8()?
                    .into_iter()
                    .map(|value| value.map(str::to_string))
                    .collect::<Vec<_>>();
                Ok(values)
            })
            .collect::<Result<Vec<_>>>()?;

        let n_sample = data.height();
        let examples = (0..n_sample).map(|row| {
                names.iter()
                    .zip(&columns)
                    .filter_map(|(name, column)| {
                        column[row].as_ref()
                            .map(|value| (name.clone(), value.clone()))
                    })
                    .collect::<Example>()
            })
            .collect::<Vec<_>>();

        Ok(Self::from_examples(examples, &names[..], target))
    }


    /// Read a CSV format file to `Sample` type.
    /// This method returns `Err` if the file does not exist.
    pub(crate) fn from_csv<P, S>(file: P, has_header: bool, target: S)
        -> Result<Self>
        where P: AsRef<Path>,
              S: AsRef<str>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header, target)
    }


    /// Read a comma-separated categorical table from [`BufReader`].
    ///
    /// If the table does not have the header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    ///
    /// Each field is trimmed; an empty field means that
    /// the example does not hold the attribute.
    /// Blank lines are skipped.
    pub fn from_reader<R, S>(
        reader: BufReader<R>,
        has_header: bool,
        target: S,
    ) -> Result<Self>
        where R: Read,
              S: AsRef<str>,
    {
        let target = target.as_ref();
        let mut names: Option<Vec<String>> = None;
        let mut examples = Vec::new();

        // For each line of the file
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let fields = line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>();

            // The first line is the header if `has_header` is set.
            // Otherwise, construct a dummy header.
            if names.is_none() {
                let header = if has_header {
                    fields.iter().map(|f| f.to_string()).collect()
                } else {
                    (1..=fields.len())
                        .map(|k| format!("Feat. [{k}]"))
                        .collect()
                };
                names = Some(header);
                if has_header { continue; }
            }
            let header = names.as_deref().unwrap_or_default();

            if fields.len() != header.len() {
                return Err(TreeError::MalformedRow {
                    line: i + 1,
                    expected: header.len(),
                    got: fields.len(),
                });
            }

            let example = header.iter()
                .zip(fields)
                .filter(|(_, value)| !value.is_empty())
                .collect::<Example>();
            examples.push(example);
        }

        let names = names.unwrap_or_default();
        if !names.iter().any(|name| name == target) {
            return Err(TreeError::UnknownAttribute(target.to_string()));
        }

        Ok(Self::from_examples(examples, &names[..], target))
    }


    /// Returns the slice of examples.
    #[inline]
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }


    /// Returns the attribute domains.
    #[inline]
    pub fn domains(&self) -> &Domains {
        &self.domains
    }


    /// Returns the name of the class attribute.
    #[inline]
    pub fn class(&self) -> &str {
        &self.class
    }


    /// Returns the splitting attributes,
    /// i.e., the attributes of the domain table except the class.
    pub fn attributes(&self) -> Vec<&str> {
        self.domains.attributes()
            .filter(|name| *name != self.class)
            .collect()
    }


    /// Returns the pair of
    /// the number of examples and the number of splitting attributes.
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.attributes().len())
    }


    /// Returns the class value of each example.
    /// `None` means that the example does not hold the class attribute.
    pub fn target(&self) -> Vec<Option<&str>> {
        self.examples.iter()
            .map(|example| example.get(&self.class))
            .collect()
    }


    /// Check whether this sample can be used for training.
    /// The sample must be non-empty,
    /// every splitting attribute must have a non-empty domain,
    /// and every example must hold the class attribute and
    /// a legal value for each splitting attribute.
    pub fn validate(&self) -> Result<()> {
        if self.examples.is_empty() {
            return Err(TreeError::EmptySample);
        }

        let attributes = self.attributes();
        let domains = attributes.iter()
            .map(|&name| {
                self.domains.values(name)
                    .filter(|values| !values.is_empty())
                    .map(|values| (name, values))
                    .ok_or_else(|| TreeError::EmptyDomain(name.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        for (row, example) in self.examples.iter().enumerate() {
            if !example.contains(&self.class) {
                return Err(TreeError::MissingClass {
                    row,
                    class: self.class.clone(),
                });
            }

            for &(attribute, values) in domains.iter() {
                let Some(value) = example.get(attribute) else {
                    return Err(TreeError::MissingAttribute {
                        row,
                        attribute: attribute.to_string(),
                    });
                };
                if !values.iter().any(|v| v == value) {
                    return Err(TreeError::UnknownValue {
                        row,
                        attribute: attribute.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }


    /// Split this sample into a training part and a holdout part.
    /// The examples are shuffled with a generator seeded by `seed`,
    /// and the first `ratio` fraction goes to the training part.
    /// Both parts share the domains of `self`.
    pub fn split(&self, ratio: f64, seed: u64) -> (Self, Self) {
        checkers::split_ratio(ratio);

        let n_sample = self.examples.len();
        let mut ix = (0..n_sample).collect::<Vec<usize>>();
        let mut rng = StdRng::seed_from_u64(seed);
        ix.shuffle(&mut rng);

        let n_train = (n_sample as f64 * ratio).round() as usize;
        let (train, test) = ix.split_at(n_train);

        let pick = |ix: &[usize]| {
            let examples = ix.iter()
                .map(|&i| self.examples[i].clone())
                .collect::<Vec<_>>();
            Self::new(examples, self.domains.clone(), self.class.clone())
        };
        (pick(train), pick(test))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample_from_bytes(bytes: &[u8], has_header: bool) -> Result<Sample> {
        let reader = BufReader::new(bytes);
        Sample::from_reader(reader, has_header, "play")
    }

    #[test]
    fn test_from_reader_01() {
        let bytes = b"\
            weather,wind,play\n\
            sunny,weak,yes\n\
            rainy,strong,no\n\
            \n\
            sunny,,yes\n";
        let sample = sample_from_bytes(&bytes[..], true).unwrap();
        let (n_sample, n_attr) = sample.shape();
        assert_eq!(n_sample, 3, "expected 3 examples, got {n_sample}.");
        assert_eq!(n_attr, 2, "expected 2 attributes, got {n_attr}.");

        let wind = sample.domains().values("wind").unwrap();
        assert_eq!(wind.len(), 2, "got {wind:?}.");
        assert!(!sample.examples()[2].contains("wind"));
    }

    #[test]
    fn test_from_reader_02() {
        let bytes = b"\
            weather,play\n\
            sunny,yes,extra\n";
        let res = sample_from_bytes(&bytes[..], true);
        match res {
            Err(TreeError::MalformedRow { line, expected, got }) => {
                assert_eq!((line, expected, got), (2, 2, 3));
            },
            other => panic!("expected MalformedRow, got {other:?}."),
        }
    }

    #[test]
    fn test_from_reader_03() {
        let bytes = b"sunny,yes\nrainy,no\n";
        let reader = BufReader::new(&bytes[..]);
        let sample = Sample::from_reader(reader, false, "Feat. [2]")
            .unwrap();
        assert_eq!(sample.shape(), (2, 1));
        assert_eq!(sample.attributes(), vec!["Feat. [1]"]);
    }

    #[test]
    fn test_from_reader_04() {
        let bytes = b"weather,label\nsunny,yes\n";
        let res = sample_from_bytes(&bytes[..], true);
        assert!(
            matches!(res, Err(TreeError::UnknownAttribute(_))),
            "expected UnknownAttribute, got {res:?}."
        );
    }

    #[test]
    fn test_validate_01() {
        let examples = vec![
            Example::from([("a", "x"), ("play", "yes")]),
            Example::from([("a", "y")]),
        ];
        let sample = Sample::from_examples(examples, &["a", "play"], "play");
        let res = sample.validate();
        assert!(
            matches!(res, Err(TreeError::MissingClass { row: 1, .. })),
            "expected MissingClass at row 1, got {res:?}."
        );
    }

    #[test]
    fn test_validate_02() {
        // `note` is blank in every row, so its domain is empty.
        let bytes = b"\
            w,note,play\n\
            a,,yes\n\
            b,,no\n\
            a,,no\n";
        let sample = sample_from_bytes(&bytes[..], true).unwrap();
        let res = sample.validate();
        match res {
            Err(TreeError::EmptyDomain(name)) => {
                assert_eq!(name, "note", "expected note, got {name}.");
            },
            other => panic!("expected EmptyDomain, got {other:?}."),
        }
    }

    #[test]
    fn test_validate_03() {
        // `note` is held by the second row only.
        let bytes = b"\
            w,note,play\n\
            a,,yes\n\
            b,x,no\n\
            a,,no\n";
        let sample = sample_from_bytes(&bytes[..], true).unwrap();
        let res = sample.validate();
        match res {
            Err(TreeError::MissingAttribute { row, attribute }) => {
                assert_eq!((row, attribute.as_str()), (0, "note"));
            },
            other => panic!("expected MissingAttribute, got {other:?}."),
        }
    }

    #[test]
    fn test_validate_04() {
        let examples = vec![
            Example::from([("a", "x"), ("play", "yes")]),
            Example::from([("a", "z"), ("play", "no")]),
        ];
        let domains = Domains::new().insert("a", ["x", "y"]);
        let sample = Sample::new(examples, domains, "play");
        let res = sample.validate();
        assert!(
            matches!(res, Err(TreeError::UnknownValue { row: 1, .. })),
            "expected UnknownValue at row 1, got {res:?}."
        );

        let examples = vec![Example::from([("a", "x"), ("play", "yes")])];
        let domains = Domains::new().insert("a", ["x", "y"]);
        let sample = Sample::new(examples, domains, "play");
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_split_01() {
        let examples = (0..10)
            .map(|i| {
                let v = format!("{}", i % 3);
                Example::from([("a", v), ("play", "yes".to_string())])
            })
            .collect::<Vec<_>>();
        let sample = Sample::from_examples(examples, &["a", "play"], "play");
        let (train, test) = sample.split(0.7, 1234);
        assert_eq!(train.shape().0, 7);
        assert_eq!(test.shape().0, 3);

        let (again, _) = sample.split(0.7, 1234);
        assert_eq!(train.examples(), again.examples());
    }
}
