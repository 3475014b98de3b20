//! Seed content for a fresh session.

/// Opening assistant message shown before any prompt is sent.
pub const INITIAL_MESSAGE: &str = "I've created the initial landing page structure for AstraMind. You can see the hero section, navigation, and primary call-to-actions based on the \"Modern SaaS\" theme.";

/// Title of the seeded artifact.
pub const INITIAL_TITLE: &str = "AstraMind Landing Page";

/// Code snippet the seeded artifact opens with.
// The snippet contains `href="#"`, so the raw string needs two-hash
// delimiters.
pub const INITIAL_CODE: &str = r##"import React from 'react';
import { ArrowUp, Sparkles } from 'lucide-react';

export default function AstraMindLanding() {
  return (
    <div className="bg-white min-h-screen font-sans text-slate-900">
      {/* Navigation */}
      <nav className="flex items-center justify-between px-8 py-6 border-b border-gray-100">
        <div className="flex items-center gap-2">
          <div className="w-6 h-6 rounded-full bg-indigo-600 flex items-center justify-center text-white font-bold text-xs">
            A
          </div>
          <span className="font-bold text-xl tracking-tight">AstraMind</span>
        </div>

        <div className="hidden md:flex items-center gap-8 text-sm font-medium text-slate-600">
          <a href="#" className="hover:text-indigo-600">Features</a>
          <a href="#" className="hover:text-indigo-600">Pricing</a>
          <a href="#" className="hover:text-indigo-600">Solutions</a>
          <a href="#" className="hover:text-indigo-600">Contact</a>
        </div>

        <button className="bg-slate-900 text-white px-5 py-2 rounded-full text-sm font-semibold hover:bg-slate-800 transition-colors flex items-center gap-2">
          Get Started <ArrowUp className="rotate-90 w-3.5 h-3.5" />
        </button>
      </nav>

      {/* Hero Section */}
      <main className="flex flex-col items-center justify-center pt-20 pb-12 px-6 text-center">
        <div className="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-indigo-50 text-indigo-700 text-sm font-semibold mb-8 border border-indigo-100">
          <Sparkles className="w-3.5 h-3.5" />
          AI automation for product teams
        </div>

        <h1 className="text-5xl md:text-7xl font-bold mb-6 tracking-tight max-w-4xl leading-[1.1]">
          Custom AI workflows <br/>
          built for <span className="text-indigo-600">ambitious teams</span>
        </h1>

        <p className="text-lg text-slate-500 max-w-2xl mb-10 leading-relaxed">
          Automate your product development lifecycle with intelligent agents
          that understand your codebase and business logic.
        </p>

        <div className="flex items-center gap-4">
          <button className="bg-indigo-600 text-white px-8 py-3.5 rounded-full font-semibold text-base hover:bg-indigo-700 shadow-lg shadow-indigo-200 transition-all">
            Start Building Free
          </button>
          <button className="bg-white text-slate-700 border border-gray-200 px-8 py-3.5 rounded-full font-semibold text-base hover:bg-gray-50 transition-colors">
            Book a Demo
          </button>
        </div>
      </main>
    </div>
  );
}"##;
