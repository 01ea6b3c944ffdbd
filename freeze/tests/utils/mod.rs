#![allow(dead_code)]
use std::path::{Path, PathBuf};

use prost::Message;
use tract_onnx::pb::tensor_proto::DataType;
use tract_onnx::pb::tensor_shape_proto::{dimension, Dimension};
use tract_onnx::pb::*;

pub fn value_info(name: &str, dims: &[Dim]) -> ValueInfoProto {
    let dim = dims
        .iter()
        .map(|d| Dimension {
            value: Some(match d {
                Dim::Fixed(v) => dimension::Value::DimValue(*v),
                Dim::Param(p) => dimension::Value::DimParam(p.to_string()),
            }),
            ..Default::default()
        })
        .collect();
    ValueInfoProto {
        name: name.to_string(),
        r#type: Some(TypeProto {
            value: Some(type_proto::Value::TensorType(type_proto::Tensor {
                elem_type: DataType::Float as i32,
                shape: Some(TensorShapeProto { dim, ..Default::default() }),
                ..Default::default()
            })),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Dim {
    Fixed(i64),
    Param(&'static str),
}

pub fn initializer(name: &str, dims: &[i64], values: &[f32]) -> TensorProto {
    TensorProto {
        name: name.to_string(),
        dims: dims.to_vec(),
        data_type: DataType::Float as i32,
        float_data: values.to_vec(),
        ..Default::default()
    }
}

pub fn node(op: &str, inputs: &[&str], outputs: &[&str]) -> NodeProto {
    NodeProto {
        name: outputs[0].to_string(),
        op_type: op.to_string(),
        input: inputs.iter().map(|s| s.to_string()).collect(),
        output: outputs.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

pub fn model(graph: GraphProto) -> ModelProto {
    ModelProto {
        ir_version: 7,
        producer_name: "nnef-freeze tests".to_string(),
        opset_import: vec![OperatorSetIdProto { version: 13, ..Default::default() }],
        graph: Some(graph),
        ..Default::default()
    }
}

/// `relu(x . w + b)` with x: batch x 4, w: 4 x 3, b: 3.
pub fn dense(batch: Dim) -> ModelProto {
    let w: Vec<f32> = (0..12).map(|i| (i as f32 - 6.0) / 4.0).collect();
    model(GraphProto {
        name: "dense".to_string(),
        node: vec![
            node("MatMul", &["x", "w"], &["xw"]),
            node("Add", &["xw", "b"], &["pre"]),
            node("Relu", &["pre"], &["y"]),
        ],
        initializer: vec![initializer("w", &[4, 3], &w), initializer("b", &[3], &[0.1, -0.2, 0.3])],
        input: vec![value_info("x", &[batch, Dim::Fixed(4)])],
        output: vec![value_info("y", &[batch, Dim::Fixed(3)])],
        ..Default::default()
    })
}

/// Same wiring as `dense`, with an operator no framework knows in the middle.
pub fn unsupported() -> ModelProto {
    model(GraphProto {
        name: "unsupported".to_string(),
        node: vec![
            node("MatMul", &["x", "w"], &["xw"]),
            node("FrobnicateDynamically", &["xw"], &["y"]),
        ],
        initializer: vec![initializer("w", &[4, 3], &[0.5; 12])],
        input: vec![value_info("x", &[Dim::Fixed(2), Dim::Fixed(4)])],
        output: vec![value_info("y", &[Dim::Fixed(2), Dim::Fixed(3)])],
        ..Default::default()
    })
}

pub fn save(model: &ModelProto, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, model.encode_to_vec()).unwrap();
    path
}

/// Names and payloads of every entry of a plain tar archive, sorted by name.
pub fn tar_entries(path: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    use std::io::Read;
    let mut archive = tar::Archive::new(std::fs::File::open(path).unwrap());
    let mut entries: Vec<(PathBuf, Vec<u8>)> = archive
        .entries()
        .unwrap()
        .map(|e| {
            let mut e = e.unwrap();
            let mut data = vec![];
            e.read_to_end(&mut data).unwrap();
            (e.path().unwrap().to_path_buf(), data)
        })
        .collect();
    entries.sort();
    entries
}
