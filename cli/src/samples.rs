use clap::ValueEnum;
use jdump::{Emitter, Result};
use std::io::Write;

/// Documents printed by the check tool, one session each.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    Array,
    Object,
    EmptyArray,
    EmptyObject,
    ArrayOfContainers,
    ObjectOfContainers,
}

impl Sample {
    pub fn title(self) -> &'static str {
        match self {
            Sample::Array => "a simple array [ 1, 2, 3 ]",
            Sample::Object => "a simple object { \"a\": 12, \"b\": 13, \"c\": \"chicken\" }",
            Sample::EmptyArray => "an empty array []",
            Sample::EmptyObject => "an empty object {}",
            Sample::ArrayOfContainers => "an array of arrays and objects",
            Sample::ObjectOfContainers => "object of arrays and objects",
        }
    }

    pub fn dump<W: Write>(self, j: &mut Emitter<W>) -> Result<()> {
        match self {
            Sample::Array => simple_array(j),
            Sample::Object => simple_object(j),
            Sample::EmptyArray => {
                j.put_array()?;
                j.close_array()
            }
            Sample::EmptyObject => {
                j.put_object()?;
                j.close_object()
            }
            Sample::ArrayOfContainers => {
                j.put_array()?;
                simple_array(j)?;
                j.put_array()?;
                j.close_array()?;
                simple_object(j)?;
                j.close_array()
            }
            Sample::ObjectOfContainers => {
                j.put_object()?;
                j.put_key("arr")?;
                simple_array(j)?;
                j.put_key("obj")?;
                simple_object(j)?;
                j.close_object()
            }
        }
    }
}

fn simple_array<W: Write>(j: &mut Emitter<W>) -> Result<()> {
    j.put_array()?;
    for n in 1..=3 {
        j.put_display(&n)?;
    }
    j.close_array()
}

fn simple_object<W: Write>(j: &mut Emitter<W>) -> Result<()> {
    j.put_object()?;
    j.put_key("a")?;
    j.put_display(&12)?;
    j.put_key("b")?;
    j.put_display(&13)?;
    j.put_key("c")?;
    j.put_str("chicken")?;
    j.close_object()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(sample: Sample) -> String {
        let mut j = Emitter::new(Vec::new());
        sample.dump(&mut j).unwrap();
        String::from_utf8(j.finish().unwrap()).unwrap()
    }

    #[test]
    fn every_sample_is_balanced() {
        for sample in Sample::value_variants() {
            let out = render(*sample);
            assert!(out.ends_with('\n'), "{:?}", sample);
        }
    }

    #[test]
    fn sample_texts() {
        assert_eq!(render(Sample::EmptyArray), "[ ]\n");
        assert_eq!(render(Sample::EmptyObject), "{ }\n");
        assert_eq!(render(Sample::Array), "[ \n  1,\n  2,\n  3\n]\n");
        assert_eq!(
            render(Sample::ObjectOfContainers),
            "{ \n  \"arr\": [ \n    1,\n    2,\n    3\n  ],\n  \"obj\": { \n    \"a\": 12,\n    \"b\": 13,\n    \"c\": \"chicken\"\n  }\n}\n"
        );
    }
}
