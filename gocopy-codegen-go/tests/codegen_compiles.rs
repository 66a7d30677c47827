//! Integration tests that verify generated code compiles and behaves.
//!
//! These tests generate Go files into a module next to hand-written message
//! types and a `_test.go` file, then run `go test` over the module. They are
//! skipped when no `go` is on `PATH`.

use std::{path::Path, process::Command};

use gocopy_codegen_go::{Generator, GeneratorConfig};
use gocopy_protoc::{PluginParams, convert};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileOptions,
    OneofDescriptorProto,
    compiler::CodeGeneratorRequest,
    field_descriptor_proto::{Label, Type},
};
use tempfile::TempDir;

const GO_MOD: &str = "module example.com/api/addresspb\n\ngo 1.18\n";

/// What protoc-gen-go would emit for the messages, reduced to the fields and getters.
const ADDRESS_PB_GO: &str = r#"package addresspb

type Address struct {
	City    string
	Country isAddress_Country
}

type isAddress_Country interface {
	isAddress_Country()
}

type Address_Domestic struct {
	Domestic bool
}

type Address_Foreign struct {
	Foreign string
}

func (*Address_Domestic) isAddress_Country() {}

func (*Address_Foreign) isAddress_Country() {}

func (x *Address) GetCity() string {
	if x != nil {
		return x.City
	}
	return ""
}

func (x *Address) GetCountry() isAddress_Country {
	if x != nil {
		return x.Country
	}
	return nil
}

func (x *Address) GetDomestic() bool {
	if x, ok := x.GetCountry().(*Address_Domestic); ok {
		return x.Domestic
	}
	return false
}

func (x *Address) GetForeign() string {
	if x, ok := x.GetCountry().(*Address_Foreign); ok {
		return x.Foreign
	}
	return ""
}

type Room struct {
	Floor *int32
}

func (x *Room) GetFloor() int32 {
	if x != nil && x.Floor != nil {
		return *x.Floor
	}
	return 0
}
"#;

const ADDRESS_TEST_GO: &str = r#"package addresspb

import "testing"

type cityOnly struct{}

func (cityOnly) GetCity() string { return "Sydney" }

type cityAndForeign struct{}

func (cityAndForeign) GetCity() string    { return "Sydney" }
func (cityAndForeign) GetForeign() string { return "AU" }

type bothVariants struct{}

func (bothVariants) GetDomestic() bool   { return true }
func (bothVariants) GetForeign() string { return "AU" }

type defaultDomestic struct{}

func (defaultDomestic) GetDomestic() bool   { return false }
func (defaultDomestic) GetForeign() string { return "NZ" }

type floorOnly struct{}

func (floorOnly) GetFloor() int32 { return 3 }

func TestVariantFromForeignGetters(t *testing.T) {
	var x Address
	x.Proto_ShallowCopy(cityAndForeign{})
	if x.City != "Sydney" {
		t.Fatalf("City = %q", x.City)
	}
	w, ok := x.Country.(*Address_Foreign)
	if !ok || w.Foreign != "AU" {
		t.Fatalf("Country = %#v", x.Country)
	}
}

func TestMissingGettersLeaveFieldsAlone(t *testing.T) {
	country := &Address_Domestic{Domestic: true}
	x := Address{Country: country}
	x.Proto_ShallowCopy(cityOnly{})
	if x.City != "Sydney" {
		t.Fatalf("City = %q", x.City)
	}
	if x.Country != isAddress_Country(country) {
		t.Fatalf("Country = %#v", x.Country)
	}

	x.Proto_ShallowCopy(struct{}{})
	if x.City != "Sydney" || x.Country != isAddress_Country(country) {
		t.Fatalf("x = %#v", x)
	}
}

func TestFirstVariantWins(t *testing.T) {
	var x Address
	x.Proto_ShallowCopy(bothVariants{})
	if w, ok := x.Country.(*Address_Domestic); !ok || !w.Domestic {
		t.Fatalf("Country = %#v", x.Country)
	}
}

func TestDefaultVariantIsSkipped(t *testing.T) {
	var x Address
	x.Proto_ShallowCopy(defaultDomestic{})
	if w, ok := x.Country.(*Address_Foreign); !ok || w.Foreign != "NZ" {
		t.Fatalf("Country = %#v", x.Country)
	}
}

func TestExactTypeMatchesFallback(t *testing.T) {
	src := &Address{City: "Perth", Country: &Address_Foreign{Foreign: "AU"}}

	var exact Address
	exact.Proto_ShallowCopy(src)
	if exact.City != src.City || exact.Country != src.Country {
		t.Fatalf("exact = %#v", exact)
	}

	var fallback Address
	fallback.Proto_ShallowCopy(cityAndForeign{})
	if fallback.City != "Sydney" || fallback.GetForeign() != exact.GetForeign() {
		t.Fatalf("fallback = %#v", fallback)
	}
}

func TestClone(t *testing.T) {
	var nilAddress *Address
	if c := nilAddress.Proto_ShallowClone(); c != nil {
		t.Fatalf("clone of nil = %#v", c)
	}

	src := &Address{City: "Perth", Country: &Address_Domestic{Domestic: true}}
	c := src.Proto_ShallowClone()
	if c == src || c.City != src.City || c.Country != src.Country {
		t.Fatalf("clone = %#v", c)
	}
	cc := c.Proto_ShallowClone()
	if *cc != *c {
		t.Fatalf("clone of clone = %#v", cc)
	}
}

func TestPresencePointer(t *testing.T) {
	var x Room
	x.Proto_ShallowCopy(floorOnly{})
	if x.Floor == nil || *x.Floor != 3 {
		t.Fatalf("Floor = %v", x.Floor)
	}

	x.Proto_ShallowCopy(&Room{})
	if x.Floor != nil {
		t.Fatalf("Floor = %v", *x.Floor)
	}

	x.Floor = new(int32)
	var nilRoom *Room
	x.Proto_ShallowCopy(nilRoom)
	if x.Floor != nil {
		t.Fatalf("Floor = %v", *x.Floor)
	}
}
"#;

fn go_available() -> bool {
    Command::new("go").arg("version").output().is_ok()
}

fn field(name: &str, number: i32, ty: Type, oneof_index: Option<i32>) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        oneof_index,
        ..Default::default()
    }
}

fn oneof(name: &str) -> OneofDescriptorProto {
    OneofDescriptorProto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

fn request() -> CodeGeneratorRequest {
    let address = DescriptorProto {
        name: Some("Address".to_string()),
        field: vec![
            field("city", 1, Type::String, None),
            field("domestic", 2, Type::Bool, Some(0)),
            field("foreign", 3, Type::String, Some(0)),
        ],
        oneof_decl: vec![oneof("country")],
        ..Default::default()
    };
    let room = DescriptorProto {
        name: Some("Room".to_string()),
        field: vec![FieldDescriptorProto {
            proto3_optional: Some(true),
            ..field("floor", 1, Type::Int32, Some(0))
        }],
        oneof_decl: vec![oneof("_floor")],
        ..Default::default()
    };

    CodeGeneratorRequest {
        file_to_generate: vec!["api/address.proto".to_string()],
        parameter: Some("paths=source_relative".to_string()),
        proto_file: vec![FileDescriptorProto {
            name: Some("api/address.proto".to_string()),
            package: Some("api".to_string()),
            syntax: Some("proto3".to_string()),
            message_type: vec![address, room],
            options: Some(FileOptions {
                go_package: Some("example.com/api/addresspb".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }],
        ..Default::default()
    }
}

/// Run `go test` in `dir`, printing the Go sources on failure.
fn assert_go_test_passes(dir: &Path) {
    let output = Command::new("go")
        .args(["test", "./..."])
        .current_dir(dir)
        .output()
        .expect("Failed to run go test");

    if !output.status.success() {
        eprintln!("\n=== Generated files ===");
        for entry in std::fs::read_dir(dir).expect("Failed to read dir").flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "go") {
                eprintln!("{}", path.display());
                if let Ok(content) = std::fs::read_to_string(&path) {
                    for line in content.lines() {
                        eprintln!("  | {}", line);
                    }
                }
            }
        }

        panic!(
            "Generated code failed go test!\n\nstdout:\n{}\n\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_generated_methods_pass_go_test() {
    if !go_available() {
        eprintln!("go not found, skipping");
        return;
    }

    let request = request();
    let params = PluginParams::parse(request.parameter()).expect("Failed to parse params");
    let files = convert(&request, &params).expect("Failed to convert");
    let outputs = Generator::new(GeneratorConfig::default())
        .generate(&files)
        .expect("Failed to generate code");
    assert_eq!(outputs[0].name(), "api/address_copy.pb.go");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for output in &outputs {
        output.write(temp_dir.path()).expect("Failed to write file");
    }

    let module = temp_dir.path().join("api");
    std::fs::write(module.join("go.mod"), GO_MOD).expect("Failed to write go.mod");
    std::fs::write(module.join("address.pb.go"), ADDRESS_PB_GO).expect("Failed to write stub");
    std::fs::write(module.join("address_test.go"), ADDRESS_TEST_GO).expect("Failed to write test");

    assert_go_test_passes(&module);
}
