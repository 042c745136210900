use serde_json::{json, Map};

use super::super::new_project::ProjectOptions;
use super::{PackageManifest, Scripts};

pub fn package_json(opts: &ProjectOptions) -> Result<String, serde_json::Error> {
    let mut dependencies = Map::new();
    dependencies.insert("express".into(), json!("^4.21.1"));
    dependencies.insert("mongoose".into(), json!("^8.6.1"));

    if opts.env {
        dependencies.insert("dotenv".into(), json!("^16.4.5"));
    }
    if opts.auth {
        dependencies.insert("jsonwebtoken".into(), json!("^9.0.0"));
    }
    if opts.upload {
        dependencies.insert("multer".into(), json!("^1.4.5"));
    }

    let manifest = PackageManifest {
        name: opts.name.clone(),
        version: "1.0.0",
        module_type: "module",
        main: "server.js",
        scripts: Scripts {
            start: "node server.js",
            dev: "nodemon server.js",
        },
        dependencies,
        dev_dependencies: Map::new(),
    };

    let mut out = serde_json::to_string_pretty(&manifest)?;
    out.push('\n');
    Ok(out)
}

pub fn db_js() -> &'static str {
    r#"import mongoose from "mongoose";

const connectDB = async () => {
  try {
    await mongoose.connect(process.env.MONGO_URI);
    console.log("MongoDB Connected Successfully");
  } catch (error) {
    console.error("Database Connection Failed:", error.message);
    process.exit(1);
  }
};

export default connectDB;
"#
}

pub fn server_js(opts: &ProjectOptions) -> String {
    let mut out = String::from("import express from \"express\";\n");
    if opts.env {
        out.push_str("import dotenv from \"dotenv\";\ndotenv.config();\n");
    }
    out.push_str("import connectDB from \"./config/db.js\";\n\n");

    out.push_str(
        "const app = express();\n\
         app.use(express.json());\n\n\
         connectDB();\n\n",
    );

    // Default route, usable as a health check
    out.push_str(
        "app.get(\"/\", (req, res) => {\n\
         \x20 res.send(\"API is running fine\");\n\
         });\n\n",
    );

    out.push_str(
        "import userRoutes from \"./routes/userRoutes.js\";\n\
         app.use(\"/api/users\", userRoutes);\n",
    );
    if opts.auth {
        out.push_str(
            "import authRoutes from \"./routes/authRoutes.js\";\n\
             app.use(\"/api/auth\", authRoutes);\n",
        );
    }
    if opts.upload {
        out.push_str(
            "import uploadRoutes from \"./routes/uploadRoutes.js\";\n\
             app.use(\"/api/upload\", uploadRoutes);\n\
             app.use(\"/uploads\", express.static(\"uploads\"));\n",
        );
    }

    let port = if opts.env { "process.env.PORT || 3000" } else { "3000" };
    out.push_str(&format!(
        "\nconst PORT = {port};\n\
         app.listen(PORT, () =>\n\
         \x20 console.log(`Server running on http://localhost:${{PORT}}`)\n\
         );\n"
    ));

    out
}

pub fn env_file(opts: &ProjectOptions) -> String {
    let uri = match &opts.mongo_uri {
        Some(uri) => uri.clone(),
        None => format!("mongodb://localhost:27017/{}", opts.name),
    };

    let mut out = format!("MONGO_URI={uri}\nPORT=3000\n");
    if opts.auth {
        out.push_str("JWT_SECRET=supersecret\n");
    }
    out
}

pub fn gitignore() -> &'static str {
    "node_modules\n.env\nuploads\n"
}

pub fn user_model() -> &'static str {
    r#"import mongoose from "mongoose";

const userSchema = new mongoose.Schema({
  name: { type: String, required: true },
  email: { type: String, required: true, unique: true },
  age: Number
}, { timestamps: true });

export default mongoose.model("User", userSchema);
"#
}

pub fn user_controller() -> &'static str {
    r#"import User from "../models/User.js";

export const getUsers = async (req, res) => {
  try {
    const users = await User.find();
    res.json(users);
  } catch (err) {
    res.status(500).json({ error: err.message });
  }
};

export const getUserById = async (req, res) => {
  try {
    const user = await User.findById(req.params.id);
    if (!user) return res.status(404).json({ message: "User not found" });
    res.json(user);
  } catch (err) {
    res.status(500).json({ error: err.message });
  }
};

export const createUser = async (req, res) => {
  try {
    const newUser = new User(req.body);
    await newUser.save();
    res.status(201).json(newUser);
  } catch (err) {
    res.status(400).json({ error: err.message });
  }
};

export const updateUser = async (req, res) => {
  try {
    const updated = await User.findByIdAndUpdate(req.params.id, req.body, { new: true });
    if (!updated) return res.status(404).json({ message: "User not found" });
    res.json(updated);
  } catch (err) {
    res.status(400).json({ error: err.message });
  }
};

export const deleteUser = async (req, res) => {
  try {
    const deleted = await User.findByIdAndDelete(req.params.id);
    if (!deleted) return res.status(404).json({ message: "User not found" });
    res.json({ message: "User deleted successfully" });
  } catch (err) {
    res.status(500).json({ error: err.message });
  }
};
"#
}

pub fn user_routes() -> &'static str {
    r#"import express from "express";
const router = express.Router();
import { getUsers, getUserById, createUser, updateUser, deleteUser } from "../controllers/userController.js";

router.get("/", getUsers);
router.get("/:id", getUserById);
router.post("/", createUser);
router.put("/:id", updateUser);
router.delete("/:id", deleteUser);

export default router;
"#
}

pub fn auth_controller() -> &'static str {
    r#"import jwt from "jsonwebtoken";
import User from "../models/User.js";

export const registerUser = async (req, res) => {
  try {
    const user = new User(req.body);
    await user.save();
    res.json({ message: "User registered successfully", user });
  } catch (err) {
    res.status(400).json({ error: err.message });
  }
};

export const loginUser = async (req, res) => {
  const { email } = req.body;
  const user = await User.findOne({ email });
  if (!user) return res.status(404).json({ message: "User not found" });

  const token = jwt.sign({ id: user._id }, process.env.JWT_SECRET || "secret", { expiresIn: "1h" });
  res.json({ message: "Login successful", token });
};
"#
}

pub fn auth_routes() -> &'static str {
    r#"import express from "express";
const router = express.Router();
import { registerUser, loginUser } from "../controllers/authController.js";

router.post("/register", registerUser);
router.post("/login", loginUser);

export default router;
"#
}

pub fn upload_routes() -> &'static str {
    r#"import express from "express";
import multer from "multer";
const router = express.Router();

const storage = multer.diskStorage({
  destination: (req, file, cb) => cb(null, "uploads/"),
  filename: (req, file, cb) => cb(null, Date.now() + "-" + file.originalname)
});

const upload = multer({ storage });

router.post("/", upload.single("file"), (req, res) => {
  res.json({ message: "File uploaded successfully", file: req.file });
});

export default router;
"#
}
